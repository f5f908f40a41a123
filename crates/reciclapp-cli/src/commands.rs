//! Command handlers

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use reciclapp_app::app::{ImpactService, MaterialInput, RegistrationOutcome, RegistrationRequest};
use reciclapp_app::config::Config;
use reciclapp_app::repository::{open_catalog, open_impact_log};
use reciclapp_infra::persistence::FileImpactLogRepository;
use reciclapp_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands, SizingArgs};
use crate::menu::InteractiveMenu;
use crate::output::{
    write_catalog, write_history, write_record, write_total, write_totals_by_material,
};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if cli.log.is_some() {
        config.log_path = cli.log.clone();
    }
    if cli.catalog.is_some() {
        config.catalog_path = cli.catalog.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);
    debug!(log = ?config.log_path, catalog = ?config.catalog_path, "configuration loaded");

    match cli.command {
        Commands::Register {
            material,
            select,
            description,
            sizing,
            yes,
        } => {
            let material = match select {
                Some(number) => MaterialInput::Selection(number),
                None => MaterialInput::Name(material.unwrap_or_default()),
            };
            cmd_register(&config, output_format, material, description, sizing, yes)
        }

        Commands::Total { by_material } => cmd_total(&config, output_format, by_material),

        Commands::History { limit } => cmd_history(&config, output_format, limit),

        Commands::Clear => cmd_clear(&config),

        Commands::Catalog => {
            let catalog = open_catalog(&config)?;
            write_catalog(&mut std::io::stdout().lock(), output_format, &catalog)
        }

        Commands::Export { output } => cmd_export(&config, output),

        Commands::Menu => cmd_menu(&config),

        Commands::Config {
            show,
            set_log,
            set_catalog,
            set_output,
            reset,
        } => cmd_config(show, set_log, set_catalog, set_output, reset),
    }
}

fn open_service(config: &Config) -> Result<ImpactService<FileImpactLogRepository>> {
    Ok(ImpactService::new(open_catalog(config)?, open_impact_log(config)?))
}

fn cmd_register(
    config: &Config,
    output_format: OutputFormat,
    material: MaterialInput,
    description: Option<String>,
    sizing: SizingArgs,
    confirmed: bool,
) -> Result<()> {
    let service = open_service(config)?;
    let resolution = service.resolve(&material)?;
    let sizing = sizing.into_sizing(resolution.is_capacity_sized(), resolution.material_name())?;

    let mut request = RegistrationRequest {
        material,
        description: None,
        sizing,
        confirm_non_recyclable: confirmed,
    };
    if let Some(description) = description {
        request = request.with_description(description);
    }

    let mut stdout = std::io::stdout().lock();
    match service.register(request)? {
        RegistrationOutcome::Registered(record) => {
            write_record(&mut stdout, output_format, &record)?;
        }
        RegistrationOutcome::Declined { material } => {
            writeln!(stdout, "⚠️ '{}' no se puede reciclar.", material)?;
            writeln!(stdout, "Registro cancelado. Use --yes para registrarlo igualmente.")?;
        }
    }
    Ok(())
}

fn cmd_total(config: &Config, output_format: OutputFormat, by_material: bool) -> Result<()> {
    let service = open_service(config)?;
    let mut stdout = std::io::stdout().lock();

    if by_material {
        let groups = service.accumulated_by_material()?;
        write_totals_by_material(&mut stdout, output_format, &groups)
    } else {
        let total = service.accumulated()?;
        write_total(&mut stdout, output_format, &total)
    }
}

fn cmd_history(config: &Config, output_format: OutputFormat, limit: usize) -> Result<()> {
    let service = open_service(config)?;
    let total_count = service.history()?.len();
    let entries = service.recent(limit)?;
    write_history(&mut std::io::stdout().lock(), output_format, &entries, total_count)
}

fn cmd_clear(config: &Config) -> Result<()> {
    let service = open_service(config)?;

    if service.clear()? {
        println!("🗑 Historial limpiado correctamente.");
    } else {
        println!("No hay historial para limpiar.");
    }
    Ok(())
}

fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let service = open_service(config)?;

    // Determine output path
    let output_path = output.unwrap_or_else(|| service.log().log_path().with_extension("csv"));

    let rows = service.export_csv(&output_path)?;
    println!("Exported {} records to: {}", rows, output_path.display());
    Ok(())
}

fn cmd_menu(config: &Config) -> Result<()> {
    let service = open_service(config)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    InteractiveMenu::new(&service, stdin.lock(), stdout.lock()).run()
}

fn cmd_config(
    show: bool,
    set_log: Option<PathBuf>,
    set_catalog: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(log_path) = set_log {
        config.log_path = Some(log_path);
        modified = true;
    }

    if let Some(catalog_path) = set_catalog {
        // Fail early on a catalog that would not load
        reciclapp_infra::catalog_loader::load_catalog_from_file(&catalog_path)?;
        config.catalog_path = Some(catalog_path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
