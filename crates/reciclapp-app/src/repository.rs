//! Repository adapters for persistence layer

use std::path::PathBuf;

use reciclapp_domain::model::Catalog;
use reciclapp_infra::catalog_loader::load_catalog;
use reciclapp_infra::persistence::FileImpactLogRepository;
use reciclapp_types::Result;

use crate::config::Config;

/// Open the file-based history log
pub fn open_impact_log(config: &Config) -> Result<FileImpactLogRepository> {
    open_impact_log_at(config.log_path()?)
}

/// Open the file-based history log at a custom path
pub fn open_impact_log_at(log_path: PathBuf) -> Result<FileImpactLogRepository> {
    FileImpactLogRepository::open(log_path)
}

/// Load the configured catalog (built-in when none is configured)
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    load_catalog(config.catalog_path.as_deref())
}
