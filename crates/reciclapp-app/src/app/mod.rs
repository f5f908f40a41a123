//! Application use cases

pub mod impact_service;

pub use impact_service::{
    ImpactService, MaterialInput, RegistrationOutcome, RegistrationRequest,
};
