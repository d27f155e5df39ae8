// Cat strategy - the dog rule plus a one-life veto

use super::{body_ratio_status, HealthStatus, HealthStrategy};
use crate::pet::{Pet, Species};

/// Classifies cats: a cat down to its last life is unhealthy no matter how
/// good its measurements look; everything else follows the shared body-ratio
/// thresholds.
///
/// The veto is checked before any ratio work. Lives outside the expected 1-9
/// domain (0, 15, ...) are not special - they fall through to the ratio rule.
pub struct CatHealthStrategy;

impl HealthStrategy for CatHealthStrategy {
    fn calculate(&self, pet: &Pet) -> HealthStatus {
        // One-life veto takes absolute priority
        if let Species::Cat { number_of_lives: 1 } = pet.species {
            return HealthStatus::Unhealthy;
        }

        body_ratio_status(pet)
    }
}

// ============================================================================
// TESTS
// ============================================================================
