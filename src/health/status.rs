// Health status - the three-way classification output

use serde::{Deserialize, Serialize};

/// Health category, worst to best.
///
/// The wire strings are exact and case-sensitive (`"very healthy"` contains a
/// space) - downstream collaborators use them directly as lookup keys, so they
/// must never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "unhealthy")]
    Unhealthy,

    #[serde(rename = "healthy")]
    Healthy,

    #[serde(rename = "very healthy")]
    VeryHealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Healthy => "healthy",
            HealthStatus::VeryHealthy => "very healthy",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TESTS
// ============================================================================
