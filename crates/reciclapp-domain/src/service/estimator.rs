//! Impact estimation from material and measurements
//!
//! scaled = round(per_unit * multiplier, 2) for water, energy and CO₂.

use reciclapp_types::{Error, ImpactRecord, ImpactValues, Result, SizeTier, SizingInput};
use tracing::debug;

use super::matcher::Resolution;

fn check_measurement(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidMeasurement { field, value })
    }
}

/// Validate the measurements and pick the size tier
pub fn classify(sizing: &SizingInput) -> Result<SizeTier> {
    match *sizing {
        SizingInput::ByCapacity { liters } => {
            Ok(SizeTier::from_capacity(check_measurement("liters", liters)?))
        }
        SizingInput::ByHeight {
            height_cm,
            width_cm,
        } => {
            if let Some(width) = width_cm {
                check_measurement("width_cm", width)?;
            }
            Ok(SizeTier::from_height(check_measurement("height_cm", height_cm)?))
        }
    }
}

/// Build the record for one item
///
/// Unmatched materials still produce a record, with zero impact and
/// `recyclable = false`.
pub fn estimate(
    resolution: &Resolution<'_>,
    description: Option<String>,
    sizing: SizingInput,
) -> Result<ImpactRecord> {
    let size_tier = classify(&sizing)?;
    let multiplier = size_tier.multiplier();
    let impact = resolution
        .profile()
        .map(|profile| profile.impact.scaled(multiplier))
        .unwrap_or(ImpactValues::ZERO);

    debug!(
        material = resolution.material_name(),
        tier = %size_tier,
        multiplier,
        water = impact.water,
        energy = impact.energy,
        co2 = impact.co2,
        "estimated impact"
    );

    Ok(ImpactRecord {
        id: None,
        material: resolution.material_name().to_string(),
        description,
        size_tier,
        multiplier,
        impact,
        recyclable: resolution.is_recyclable(),
        measurement: Some(sizing),
        recorded_at: None,
    })
}
