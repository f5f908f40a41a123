//! Persistence implementations
//!
//! This module provides implementations of the `ImpactLogRepository` trait.

mod file_impact_log_repo;
mod in_memory_impact_log_repo;

pub use file_impact_log_repo::FileImpactLogRepository;
pub use in_memory_impact_log_repo::InMemoryImpactLogRepository;
