//! Infrastructure layer - persistence implementations, loaders, export

pub mod catalog_loader;
pub mod csv_export;
pub mod persistence;
