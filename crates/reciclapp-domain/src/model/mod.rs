//! Domain model types

pub mod catalog;
pub mod material;

pub use catalog::Catalog;
pub use material::MaterialProfile;
