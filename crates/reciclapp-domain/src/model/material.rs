//! Material profile definitions

use reciclapp_types::ImpactValues;
use serde::{Deserialize, Serialize};

/// Catalog entry: canonical material name and its per-unit impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Canonical name, diacritics preserved (e.g., "cartón")
    pub name: String,
    /// Savings for one medium-sized item
    pub impact: ImpactValues,
    /// `false` for "not recyclable" sentinel entries
    #[serde(default = "default_true")]
    pub recyclable: bool,
    /// Sized by container capacity in liters when known (bottles)
    #[serde(default)]
    pub capacity_sized: bool,
}

fn default_true() -> bool {
    true
}

impl MaterialProfile {
    pub fn new(name: impl Into<String>, water: f64, energy: f64, co2: f64) -> Self {
        Self {
            name: name.into(),
            impact: ImpactValues::new(water, energy, co2),
            recyclable: true,
            capacity_sized: false,
        }
    }

    pub fn non_recyclable(mut self) -> Self {
        self.recyclable = false;
        self
    }

    pub fn capacity_sized(mut self) -> Self {
        self.capacity_sized = true;
        self
    }

    /// Menu label: canonical name with the first letter capitalized
    pub fn label(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
