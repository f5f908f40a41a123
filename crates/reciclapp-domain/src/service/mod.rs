//! Domain services

pub mod accumulator;
pub mod estimator;
pub mod matcher;

pub use accumulator::{accumulate, accumulate_by_material};
pub use estimator::{classify, estimate};
pub use matcher::{normalize, MaterialMatcher, Resolution};
