// Pet Catalog - Core Library
// Pet variant model, per-species health classification, in-memory catalog

pub mod catalog;
pub mod health;
pub mod pet;

// Re-export commonly used types
pub use catalog::{HealthCensus, PetCatalog};
pub use health::{
    BirdHealthStrategy, CatHealthStrategy, DogHealthStrategy, HealthStatus, HealthStrategy,
    HealthStrategyFactory,
};
pub use pet::{Pet, Species, ValidationError, ValidationResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
