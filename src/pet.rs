// 🐾 Pet Model - Tagged variant records
// One record per animal; the `kind` discriminant selects the species shape
//
// "A value claiming kind = cat must carry number_of_lives" - the union makes
// that shape unrepresentable instead of checking it at runtime.

use serde::{Deserialize, Serialize};

// ============================================================================
// SPECIES VARIANTS
// ============================================================================

/// Species - Identifica qué forma de animal lleva el registro
///
/// Serialized inline with the shared fields, so a pet document is the flat
/// shape the catalog API serves:
/// `{"id":1,"name":"Luna","kind":"cat","number_of_lives":7,...}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Species {
    /// Dogs carry no attributes beyond the shared measurements
    Dog,

    /// Cats track remaining lives (domain expects 1-9)
    Cat { number_of_lives: u32 },

    /// Birds add wingspan and feather count
    Bird { wingspan: f64, num_of_feathers: u32 },
}

impl Species {
    /// Discriminant string, exactly as it appears on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat { .. } => "cat",
            Species::Bird { .. } => "bird",
        }
    }
}

// ============================================================================
// PET RECORD
// ============================================================================

/// A catalog animal: shared physical measurements + species variant.
///
/// Immutable input to the health engine - created by upstream loading,
/// classified, released. The engine itself never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique identifier
    pub id: u64,

    /// Display name
    pub name: String,

    /// Species variant (carries the `kind` tag on the wire)
    #[serde(flatten)]
    pub species: Species,

    /// Weight in grams
    pub weight: f64,

    /// Height in centimeters
    pub height: f64,

    /// Length in centimeters
    pub length: f64,

    /// Photo URL or path
    pub photo_url: String,

    /// Free-text description
    pub description: String,
}

impl Pet {
    /// Create a new pet with required fields
    pub fn new(
        id: u64,
        name: impl Into<String>,
        species: Species,
        weight: f64,
        height: f64,
        length: f64,
    ) -> Self {
        Pet {
            id,
            name: name.into(),
            species,
            weight,
            height,
            length,
            photo_url: String::new(),
            description: String::new(),
        }
    }

    /// Builder pattern: add photo reference
    pub fn with_photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = photo_url.into();
        self
    }

    /// Builder pattern: add description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Discriminant string for this pet
    pub fn kind(&self) -> &'static str {
        self.species.kind()
    }

    pub fn is_dog(&self) -> bool {
        matches!(self.species, Species::Dog)
    }

    pub fn is_cat(&self) -> bool {
        matches!(self.species, Species::Cat { .. })
    }

    pub fn is_bird(&self) -> bool {
        matches!(self.species, Species::Bird { .. })
    }

    /// Remaining lives, for cats
    pub fn number_of_lives(&self) -> Option<u32> {
        match self.species {
            Species::Cat { number_of_lives } => Some(number_of_lives),
            _ => None,
        }
    }

    /// Wingspan in centimeters, for birds
    pub fn wingspan(&self) -> Option<f64> {
        match self.species {
            Species::Bird { wingspan, .. } => Some(wingspan),
            _ => None,
        }
    }

    /// Feather count, for birds
    pub fn num_of_feathers(&self) -> Option<u32> {
        match self.species {
            Species::Bird { num_of_feathers, .. } => Some(num_of_feathers),
            _ => None,
        }
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

impl Pet {
    /// Validate a pet record for catalog use.
    ///
    /// The health engine trusts its input and never rejects a pet; this is
    /// the upstream gate for loaders that want to keep degenerate geometry
    /// (zero height/length, the divisors of the health ratios) out of the
    /// catalog in the first place.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();
        let context = format!("Pet {}", self.id);

        if self.name.is_empty() {
            errors.push(ValidationError {
                field: "name".to_string(),
                message: "Required field is empty".to_string(),
                context: context.clone(),
            });
        }

        for (field, value) in [
            ("weight", self.weight),
            ("height", self.height),
            ("length", self.length),
        ] {
            if !value.is_finite() || value <= 0.0 {
                errors.push(ValidationError {
                    field: field.to_string(),
                    message: format!("Must be a positive number, got {}", value),
                    context: context.clone(),
                });
            }
        }

        match self.species {
            Species::Dog => {}
            Species::Cat { number_of_lives } => {
                if number_of_lives == 0 {
                    errors.push(ValidationError {
                        field: "number_of_lives".to_string(),
                        message: "Must be at least 1".to_string(),
                        context: context.clone(),
                    });
                }
            }
            Species::Bird {
                wingspan,
                num_of_feathers,
            } => {
                if !wingspan.is_finite() || wingspan <= 0.0 {
                    errors.push(ValidationError {
                        field: "wingspan".to_string(),
                        message: format!("Must be a positive number, got {}", wingspan),
                        context: context.clone(),
                    });
                }
                if num_of_feathers == 0 {
                    errors.push(ValidationError {
                        field: "num_of_feathers".to_string(),
                        message: "Must be at least 1".to_string(),
                        context: context.clone(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
