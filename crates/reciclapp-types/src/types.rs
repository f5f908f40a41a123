//! Value types shared by the estimator, the log and the display layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Round to two decimal places (half away from zero)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Water / energy / CO₂ triple
///
/// Serialized with the keys legacy history files used
/// (`agua`, `energia`, `co2`) so old logs stay readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactValues {
    /// Water saved in liters
    #[serde(rename = "agua", default)]
    pub water: f64,
    /// Energy saved in kWh
    #[serde(rename = "energia", default)]
    pub energy: f64,
    /// CO₂ avoided in kg
    #[serde(rename = "co2", default)]
    pub co2: f64,
}

impl ImpactValues {
    pub const ZERO: ImpactValues = ImpactValues {
        water: 0.0,
        energy: 0.0,
        co2: 0.0,
    };

    pub fn new(water: f64, energy: f64, co2: f64) -> Self {
        Self { water, energy, co2 }
    }

    /// Multiply every dimension and round each one to two decimals
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            water: round2(self.water * multiplier),
            energy: round2(self.energy * multiplier),
            co2: round2(self.co2 * multiplier),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.water == 0.0 && self.energy == 0.0 && self.co2 == 0.0
    }

    pub fn is_non_negative(&self) -> bool {
        [self.water, self.energy, self.co2]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Size tier with its fixed impact multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeTier {
    /// factor 0.8
    #[serde(rename = "pequeño")]
    Small,
    /// factor 1.0
    #[serde(rename = "mediano")]
    Medium,
    /// factor 1.5
    #[serde(rename = "grande")]
    Large,
}

impl SizeTier {
    /// Tier from item height: < 15 cm small, 15..=30 cm medium, > 30 cm large
    pub fn from_height(height_cm: f64) -> Self {
        match height_cm {
            h if h < 15.0 => SizeTier::Small,
            h if h <= 30.0 => SizeTier::Medium,
            _ => SizeTier::Large,
        }
    }

    /// Tier from container capacity: < 1 L small, 1..2 L medium, >= 2 L large
    pub fn from_capacity(liters: f64) -> Self {
        match liters {
            l if l >= 2.0 => SizeTier::Large,
            l if l >= 1.0 => SizeTier::Medium,
            _ => SizeTier::Small,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            SizeTier::Small => 0.8,
            SizeTier::Medium => 1.0,
            SizeTier::Large => 1.5,
        }
    }

    /// Display label as written to the history file
    pub fn label(&self) -> &'static str {
        match self {
            SizeTier::Small => "pequeño",
            SizeTier::Medium => "mediano",
            SizeTier::Large => "grande",
        }
    }
}

impl std::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// How an item was measured
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "por")]
pub enum SizingInput {
    /// Known container capacity (bottles)
    #[serde(rename = "capacidad")]
    ByCapacity {
        #[serde(rename = "litros")]
        liters: f64,
    },
    /// Approximate height; width is kept as metadata only
    #[serde(rename = "altura")]
    ByHeight {
        #[serde(rename = "alto_cm")]
        height_cm: f64,
        #[serde(rename = "ancho_cm", default, skip_serializing_if = "Option::is_none")]
        width_cm: Option<f64>,
    },
}

impl SizingInput {
    pub fn capacity(liters: f64) -> Self {
        SizingInput::ByCapacity { liters }
    }

    pub fn height(height_cm: f64) -> Self {
        SizingInput::ByHeight {
            height_cm,
            width_cm: None,
        }
    }

    pub fn height_and_width(height_cm: f64, width_cm: f64) -> Self {
        SizingInput::ByHeight {
            height_cm,
            width_cm: Some(width_cm),
        }
    }
}

/// One registered item, as appended to the history log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredRecord")]
pub struct ImpactRecord {
    /// Assigned when the record is logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Canonical catalog name, or the raw text when unmatched
    #[serde(rename = "tipo")]
    pub material: String,

    /// Free-text description
    #[serde(rename = "descripcion", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "tamaño")]
    pub size_tier: SizeTier,

    #[serde(rename = "factor_tamaño")]
    pub multiplier: f64,

    /// Per-unit impact scaled by `multiplier`, rounded to two decimals
    #[serde(rename = "impacto")]
    pub impact: ImpactValues,

    /// Older history lines predate this field; see `StoredRecord`
    #[serde(rename = "reciclable")]
    pub recyclable: bool,

    #[serde(rename = "medida", default, skip_serializing_if = "Option::is_none")]
    pub measurement: Option<SizingInput>,

    #[serde(rename = "registrado_en", default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl ImpactRecord {
    /// Attach identity and timestamp before the record is logged
    pub fn stamped(mut self, id: Uuid, recorded_at: DateTime<Utc>) -> Self {
        self.id = Some(id);
        self.recorded_at = Some(recorded_at);
        self
    }
}

/// On-disk shape of a history line
///
/// Lines without `reciclable` were only written for a matched material
/// (non-zero impact) or for anything else (zero impact, not recyclable).
#[derive(Deserialize)]
struct StoredRecord {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(rename = "tipo")]
    material: String,
    #[serde(rename = "descripcion", default)]
    description: Option<String>,
    #[serde(rename = "tamaño")]
    size_tier: SizeTier,
    #[serde(rename = "factor_tamaño")]
    multiplier: f64,
    #[serde(rename = "impacto")]
    impact: ImpactValues,
    #[serde(rename = "reciclable", default)]
    recyclable: Option<bool>,
    #[serde(rename = "medida", default)]
    measurement: Option<SizingInput>,
    #[serde(rename = "registrado_en", default)]
    recorded_at: Option<DateTime<Utc>>,
}

impl From<StoredRecord> for ImpactRecord {
    fn from(stored: StoredRecord) -> Self {
        let recyclable = stored.recyclable.unwrap_or(!stored.impact.is_zero());
        Self {
            id: stored.id,
            material: stored.material,
            description: stored.description,
            size_tier: stored.size_tier,
            multiplier: stored.multiplier,
            impact: stored.impact,
            recyclable,
            measurement: stored.measurement,
            recorded_at: stored.recorded_at,
        }
    }
}

/// Totals over every logged record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedImpact {
    pub water: f64,
    pub energy: f64,
    pub co2: f64,
    pub record_count: usize,
}

impl AccumulatedImpact {
    pub fn add(&mut self, impact: &ImpactValues) {
        self.water += impact.water;
        self.energy += impact.energy;
        self.co2 += impact.co2;
        self.record_count += 1;
    }

    /// Totals rounded to two decimals for display
    pub fn rounded(&self) -> Self {
        Self {
            water: round2(self.water),
            energy: round2(self.energy),
            co2: round2(self.co2),
            record_count: self.record_count,
        }
    }
}
