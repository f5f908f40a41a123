//! Material catalog loader from TOML
//!
//! ```toml
//! [[materials]]
//! name = "botella de plástico"
//! water = 3.0
//! energy = 0.5
//! co2 = 0.2
//! capacity_sized = true
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use reciclapp_domain::model::{Catalog, MaterialProfile};
use reciclapp_types::{ConfigError, Error, ImpactValues, Result};

/// Container for parsing a catalog file
#[derive(Debug, Deserialize)]
struct CatalogFile {
    materials: Vec<MaterialEntry>,
}

#[derive(Debug, Deserialize)]
struct MaterialEntry {
    name: String,
    water: f64,
    energy: f64,
    co2: f64,
    #[serde(default = "default_true")]
    recyclable: bool,
    #[serde(default)]
    capacity_sized: bool,
}

fn default_true() -> bool {
    true
}

impl From<MaterialEntry> for MaterialProfile {
    fn from(entry: MaterialEntry) -> Self {
        MaterialProfile {
            name: entry.name,
            impact: ImpactValues::new(entry.water, entry.energy, entry.co2),
            recyclable: entry.recyclable,
            capacity_sized: entry.capacity_sized,
        }
    }
}

/// Load a catalog from a TOML file
pub fn load_catalog_from_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            e
        )))
    })?;

    load_catalog_from_str(&content)
}

/// Load a catalog from a TOML string
pub fn load_catalog_from_str(toml_content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse catalog TOML: {}",
            e
        )))
    })?;

    Catalog::new(file.materials.into_iter().map(Into::into).collect())
}

/// Load the catalog at `path`, or the built-in one when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog_from_file(path),
        None => Ok(Catalog::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[materials]]
name = "botella de plástico"
water = 3.0
energy = 0.5
co2 = 0.2
capacity_sized = true

[[materials]]
name = "aluminio"
water = 7
energy = 2.0
co2 = 0.9

[[materials]]
name = "no reciclable"
water = 0
energy = 0
co2 = 0
recyclable = false
"#;

    #[test]
    fn test_load_from_str() {
        let catalog = load_catalog_from_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);

        let bottle = catalog.get_numbered(1).unwrap();
        assert!(bottle.capacity_sized);
        assert!(bottle.recyclable);

        let aluminium = catalog.get_numbered(2).unwrap();
        assert_eq!(aluminium.impact, ImpactValues::new(7.0, 2.0, 0.9));
        assert!(!aluminium.capacity_sized);

        assert!(!catalog.get_numbered(3).unwrap().recyclable);
    }

    #[test]
    fn test_invalid_toml() {
        let result = load_catalog_from_str("materials = 3");
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }

    #[test]
    fn test_negative_value_rejected() {
        let toml = r#"
[[materials]]
name = "lata"
water = -1
energy = 1
co2 = 0.5
"#;
        assert!(load_catalog_from_str(toml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = load_catalog_from_file(Path::new("/nonexistent/catalogo.toml"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(load_catalog(None).unwrap(), Catalog::builtin());
    }
}
