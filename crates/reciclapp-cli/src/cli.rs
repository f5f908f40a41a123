//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use reciclapp_types::{Error, OutputFormat, Result, SizingInput};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reciclapp")]
#[command(version)]
#[command(about = "Estimate the water, energy and CO₂ saved by recycling")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// History log file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    /// TOML material catalog replacing the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Size measurements given on the command line
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct SizingArgs {
    /// Container capacity in liters (bottles only)
    #[arg(long, short = 'l', conflicts_with = "height")]
    pub liters: Option<f64>,

    /// Item height in cm
    #[arg(long)]
    pub height: Option<f64>,

    /// Item width in cm (recorded, not used for sizing)
    #[arg(long, requires = "height")]
    pub width: Option<f64>,
}

impl SizingArgs {
    /// Pick the sizing mode for a resolved material
    pub fn into_sizing(self, capacity_sized: bool, material: &str) -> Result<SizingInput> {
        match (self.liters, self.height) {
            (Some(liters), _) if capacity_sized => Ok(SizingInput::capacity(liters)),
            (Some(_), _) => Err(Error::InvalidArgument(format!(
                "--liters only applies to bottles; use --height for '{}'",
                material
            ))),
            (None, Some(height)) => Ok(SizingInput::ByHeight {
                height_cm: height,
                width_cm: self.width,
            }),
            (None, None) => Err(Error::InvalidArgument(
                "Provide --height (or --liters for bottles)".to_string(),
            )),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a discarded item and log its estimated impact
    Register {
        /// Material name (e.g., "botella de plástico", "carton")
        #[arg(required_unless_present = "select")]
        material: Option<String>,

        /// Pick the material by its number in `reciclapp catalog`
        #[arg(long, short = 's', conflicts_with = "material")]
        select: Option<String>,

        /// Free-text description of the item
        #[arg(long, short = 'd')]
        description: Option<String>,

        #[command(flatten)]
        sizing: SizingArgs,

        /// Log non-recyclable items without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the accumulated impact of all registered items
    Total {
        /// Break the totals down by material
        #[arg(long)]
        by_material: bool,
    },

    /// Show registered items, newest first
    History {
        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Delete the whole history log
    Clear,

    /// List the material catalog
    Catalog,

    /// Export the history log to CSV
    Export {
        /// Output CSV file path (defaults next to the log)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Interactive menu
    Menu,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set history log path
        #[arg(long)]
        set_log: Option<PathBuf>,

        /// Set catalog file path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
