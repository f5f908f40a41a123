//! Domain layer: material catalog, matching, impact estimation

pub mod model;
pub mod repository;
pub mod service;
