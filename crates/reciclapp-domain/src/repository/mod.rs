//! Repository trait definitions for data persistence

use reciclapp_types::{Error, ImpactRecord};

/// Append-only history of registered items
pub trait ImpactLogRepository {
    /// Append one record at the end of the log
    fn append(&self, record: &ImpactRecord) -> Result<(), Error>;

    /// All records in insertion order
    fn find_all(&self) -> Result<Vec<ImpactRecord>, Error>;

    /// Remove every record; returns whether there was anything to remove
    fn clear(&self) -> Result<bool, Error>;
}
