//! Material impact catalog
//!
//! The catalog is an immutable value built once (built-in table or a
//! user-supplied file) and borrowed by the matcher.

use std::collections::HashSet;

use reciclapp_types::{ConfigError, Error, Result};

use super::MaterialProfile;
use crate::service::matcher::normalize;

/// Ordered list of material profiles; order defines menu numbering
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    materials: Vec<MaterialProfile>,
}

impl Catalog {
    /// Build a catalog, rejecting empty tables, negative impacts and names
    /// that collide once normalized
    pub fn new(materials: Vec<MaterialProfile>) -> Result<Self> {
        if materials.is_empty() {
            return Err(Error::Config(ConfigError::ParseError(
                "Catalog has no materials".to_string(),
            )));
        }

        let mut seen = HashSet::new();
        for material in &materials {
            let key = normalize(&material.name);
            if key.is_empty() {
                return Err(Error::Config(ConfigError::ParseError(
                    "Catalog entry with empty name".to_string(),
                )));
            }
            if !material.impact.is_non_negative() {
                return Err(Error::Config(ConfigError::ParseError(format!(
                    "Negative or invalid impact for '{}'",
                    material.name
                ))));
            }
            if !seen.insert(key) {
                return Err(Error::Config(ConfigError::ParseError(format!(
                    "Duplicate material '{}'",
                    material.name
                ))));
            }
        }

        Ok(Self { materials })
    }

    /// Built-in impact table
    pub fn builtin() -> Self {
        Self {
            materials: vec![
                MaterialProfile::new("botella de plástico", 3.0, 0.5, 0.2).capacity_sized(),
                MaterialProfile::new("plástico", 3.0, 0.5, 0.2),
                MaterialProfile::new("lata", 5.0, 1.0, 0.5),
                MaterialProfile::new("cartón", 2.0, 0.3, 0.1),
                MaterialProfile::new("papel", 4.0, 0.4, 0.2),
                MaterialProfile::new("vidrio", 1.0, 0.8, 0.3),
                MaterialProfile::new("tetrapak", 3.0, 0.6, 0.25),
                MaterialProfile::new("textil", 6.0, 1.5, 0.4),
                MaterialProfile::new("electrónico", 10.0, 5.0, 2.0),
                MaterialProfile::new("no reciclable (pañales, papel sucio, pilas, etc)", 0.0, 0.0, 0.0)
                    .non_recyclable(),
            ],
        }
    }

    pub fn materials(&self) -> &[MaterialProfile] {
        &self.materials
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialProfile> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// 1-based lookup, as presented in numbered menus
    pub fn get_numbered(&self, number: usize) -> Option<&MaterialProfile> {
        number.checked_sub(1).and_then(|i| self.materials.get(i))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
