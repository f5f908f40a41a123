//! End-to-end registration against a file-backed history log

use reciclapp_app::app::{ImpactService, RegistrationOutcome, RegistrationRequest};
use reciclapp_app::config::Config;
use reciclapp_app::repository::{open_catalog, open_impact_log};
use reciclapp_infra::persistence::FileImpactLogRepository;
use reciclapp_types::{ImpactRecord, ImpactValues, SizeTier, SizingInput};
use tempfile::tempdir;

fn file_service(dir: &std::path::Path) -> ImpactService<FileImpactLogRepository> {
    let config = Config {
        log_path: Some(dir.join("historial_reciclaje.txt")),
        ..Default::default()
    };
    ImpactService::new(
        open_catalog(&config).unwrap(),
        open_impact_log(&config).unwrap(),
    )
}

fn registered(outcome: RegistrationOutcome) -> ImpactRecord {
    match outcome {
        RegistrationOutcome::Registered(record) => record,
        other => panic!("expected a registered record, got {:?}", other),
    }
}

#[test]
fn test_records_survive_reopen_in_order() {
    let dir = tempdir().unwrap();
    let requests = vec![
        RegistrationRequest::by_name("Botella de Plastico", SizingInput::capacity(3.0))
            .with_description("botella de agua"),
        RegistrationRequest::by_name("carton", SizingInput::height_and_width(35.0, 20.0)),
        RegistrationRequest::by_selection("3", SizingInput::height(15.0)),
        RegistrationRequest::by_name("zapato viejo", SizingInput::height(29.0)),
    ];

    let written: Vec<ImpactRecord> = {
        let service = file_service(dir.path());
        requests
            .into_iter()
            .map(|r| registered(service.register(r).unwrap()))
            .collect()
    };

    let service = file_service(dir.path());
    let read = service.history().unwrap();
    assert_eq!(read.len(), 4);
    assert_eq!(read, written);
    assert_eq!(read[0].material, "botella de plástico");
    assert_eq!(read[1].material, "cartón");
    assert_eq!(read[2].material, "lata");
    assert_eq!(read[3].material, "zapato viejo");
}

#[test]
fn test_bottle_scenario_and_totals() {
    let dir = tempdir().unwrap();
    let service = file_service(dir.path());

    let bottle = registered(
        service
            .register(RegistrationRequest::by_name(
                "botella de plástico",
                SizingInput::capacity(3.0),
            ))
            .unwrap(),
    );
    assert_eq!(bottle.multiplier, 1.5);
    assert_eq!(bottle.impact, ImpactValues::new(4.5, 0.75, 0.3));

    let can = registered(
        service
            .register(RegistrationRequest::by_name("lata", SizingInput::height(10.0)))
            .unwrap(),
    );
    assert_eq!(can.size_tier, SizeTier::Small);
    assert_eq!(can.impact.water, 4.0);

    let total = service.accumulated().unwrap().rounded();
    assert_eq!(total.water, 8.5);
    assert_eq!(total.energy, 1.55);
    assert_eq!(total.co2, 0.7);
    assert_eq!(total.record_count, 2);
}

#[test]
fn test_totals_from_legacy_file() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("historial_reciclaje.txt"),
        concat!(
            r#"{"tipo": "botella de plástico", "tamaño": "mediano", "factor_tamaño": 1.0, "impacto": {"agua": 3.0, "energia": 0.5, "co2": 0.2}}"#,
            "\n",
            r#"{"tipo": "lata", "descripcion": "", "tamaño": "pequeño", "factor_tamaño": 0.8, "impacto": {"agua": 4.0, "energia": 0.8, "co2": 0.4}}"#,
            "\n",
        ),
    )
    .unwrap();

    let service = file_service(dir.path());
    let total = service.accumulated().unwrap();
    assert_eq!(total.water, 7.0);
    assert_eq!(total.record_count, 2);
}

#[test]
fn test_clear_then_register() {
    let dir = tempdir().unwrap();
    let service = file_service(dir.path());
    assert!(!service.clear().unwrap());

    service
        .register(RegistrationRequest::by_name("vidrio", SizingInput::height(20.0)))
        .unwrap();
    assert!(service.clear().unwrap());
    assert!(service.history().unwrap().is_empty());

    service
        .register(RegistrationRequest::by_name("textil", SizingInput::height(40.0)))
        .unwrap();
    let total = service.accumulated().unwrap();
    assert_eq!(total.water, 9.0);
    assert_eq!(total.record_count, 1);
}

#[test]
fn test_export_csv() {
    let dir = tempdir().unwrap();
    let service = file_service(dir.path());
    service
        .register(RegistrationRequest::by_name("papel", SizingInput::height(20.0)))
        .unwrap();
    service
        .register(RegistrationRequest::by_name("electrónico", SizingInput::height(50.0)))
        .unwrap();

    let csv_path = dir.path().join("historial.csv");
    let rows = service.export_csv(&csv_path).unwrap();
    assert_eq!(rows, 2);

    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains("electrónico"));
}

#[test]
fn test_custom_catalog() {
    let dir = tempdir().unwrap();
    let catalog_path = dir.path().join("catalogo.toml");
    std::fs::write(
        &catalog_path,
        r#"
[[materials]]
name = "corcho"
water = 1.5
energy = 0.2
co2 = 0.1
"#,
    )
    .unwrap();

    let config = Config {
        log_path: Some(dir.path().join("historial.txt")),
        catalog_path: Some(catalog_path),
        ..Default::default()
    };
    let service = ImpactService::new(
        open_catalog(&config).unwrap(),
        open_impact_log(&config).unwrap(),
    );

    let record = registered(
        service
            .register(RegistrationRequest::by_name("Corcho", SizingInput::height(40.0)))
            .unwrap(),
    );
    assert_eq!(record.impact, ImpactValues::new(2.25, 0.3, 0.15));

    let unknown = registered(
        service
            .register(RegistrationRequest::by_name("lata", SizingInput::height(40.0)))
            .unwrap(),
    );
    assert!(!unknown.recyclable);
}
