//! CSV export of the history log

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use reciclapp_types::{Error, ImpactRecord, Result, SizingInput};

/// Flat row written per record
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: String,
    registered_at: String,
    material: &'a str,
    description: &'a str,
    recyclable: bool,
    size_tier: &'static str,
    multiplier: f64,
    liters: Option<f64>,
    height_cm: Option<f64>,
    width_cm: Option<f64>,
    water_l: f64,
    energy_kwh: f64,
    co2_kg: f64,
}

impl<'a> From<&'a ImpactRecord> for CsvRow<'a> {
    fn from(record: &'a ImpactRecord) -> Self {
        let (liters, height_cm, width_cm) = match record.measurement {
            Some(SizingInput::ByCapacity { liters }) => (Some(liters), None, None),
            Some(SizingInput::ByHeight {
                height_cm,
                width_cm,
            }) => (None, Some(height_cm), width_cm),
            None => (None, None, None),
        };

        CsvRow {
            id: record.id.map(|id| id.to_string()).unwrap_or_default(),
            registered_at: record
                .recorded_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            material: &record.material,
            description: record.description.as_deref().unwrap_or(""),
            recyclable: record.recyclable,
            size_tier: record.size_tier.label(),
            multiplier: record.multiplier,
            liters,
            height_cm,
            width_cm,
            water_l: record.impact.water,
            energy_kwh: record.impact.energy,
            co2_kg: record.impact.co2,
        }
    }
}

/// Write records as CSV (with header) to any writer
pub fn write_csv<W: Write>(records: &[ImpactRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer
            .serialize(CsvRow::from(record))
            .map_err(|e| Error::Export(e.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export records to a CSV file
pub fn export_to_csv(records: &[ImpactRecord], output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(records, file)
}
