// Strategy resolver - maps `kind` to a singleton strategy
//
// Factory pattern: one static instance per species, alive for the whole
// process. Unrecognized kinds degrade to the dog strategy with an operator
// warning instead of aborting classification.

use tracing::warn;

use super::{BirdHealthStrategy, CatHealthStrategy, DogHealthStrategy};
use super::{HealthStatus, HealthStrategy};
use crate::pet::Pet;

static DOG_STRATEGY: DogHealthStrategy = DogHealthStrategy;
static CAT_STRATEGY: CatHealthStrategy = CatHealthStrategy;
static BIRD_STRATEGY: BirdHealthStrategy = BirdHealthStrategy;

pub struct HealthStrategyFactory;

impl HealthStrategyFactory {
    /// Resolve the strategy for a species discriminant.
    ///
    /// Never fails: an unrecognized or malformed kind logs a warning to the
    /// operator sink and returns the dog strategy. Idempotent - the same kind
    /// always resolves to the same instance.
    pub fn get_strategy(kind: &str) -> &'static dyn HealthStrategy {
        match kind {
            "dog" => &DOG_STRATEGY,
            "cat" => &CAT_STRATEGY,
            "bird" => &BIRD_STRATEGY,
            other => {
                warn!("No health strategy found for pet kind: {}, using default", other);
                &DOG_STRATEGY
            }
        }
    }

    /// Resolve and apply in one call - the entry point collaborators use.
    pub fn calculate_health(pet: &Pet) -> HealthStatus {
        Self::get_strategy(pet.kind()).calculate(pet)
    }
}

// ============================================================================
// TESTS
// ============================================================================
