// 📇 Pet Catalog - In-memory registry of pet records
//
// Holds the already-validated pet records the classification engine consumes.
// Ships with the development seed set so the CLI and tests have real data
// without a backend.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::health::{HealthStatus, HealthStrategyFactory};
use crate::pet::{Pet, Species};

// ============================================================================
// HEALTH CENSUS
// ============================================================================

/// Tally of health statuses across a catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HealthCensus {
    pub unhealthy: usize,
    pub healthy: usize,
    pub very_healthy: usize,
}

impl HealthCensus {
    pub fn total(&self) -> usize {
        self.unhealthy + self.healthy + self.very_healthy
    }

    pub fn summary(&self) -> String {
        format!(
            "{} pets: {} very healthy, {} healthy, {} unhealthy",
            self.total(),
            self.very_healthy,
            self.healthy,
            self.unhealthy
        )
    }
}

// ============================================================================
// PET CATALOG
// ============================================================================

pub struct PetCatalog {
    pets: Vec<Pet>,
}

impl PetCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        PetCatalog { pets: Vec::new() }
    }

    /// Create a catalog from a list of pets
    pub fn from_pets(pets: Vec<Pet>) -> Self {
        PetCatalog { pets }
    }

    /// Parse a catalog from a JSON array of pet documents
    pub fn from_json(json: &str) -> Result<Self> {
        let pets: Vec<Pet> =
            serde_json::from_str(json).context("Failed to parse pets JSON")?;
        Ok(PetCatalog::from_pets(pets))
    }

    /// Load a catalog from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read pets file: {:?}", path.as_ref()))?;
        Self::from_json(&content)
    }

    /// Create a catalog pre-loaded with the development seed set
    pub fn with_seed_pets() -> Self {
        let mut catalog = PetCatalog::new();
        catalog.register_seed_pets();
        catalog
    }

    /// Add a pet to the catalog. The catalog trusts upstream to keep ids
    /// unique, the same way the engine trusts its input shape.
    pub fn register(&mut self, pet: Pet) {
        self.pets.push(pet);
    }

    /// Find a pet by its identifier
    pub fn find_by_id(&self, id: u64) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    /// All pets, in registration order
    pub fn all_pets(&self) -> &[Pet] {
        &self.pets
    }

    /// Pets of one species
    pub fn by_kind(&self, kind: &str) -> Vec<&Pet> {
        self.pets.iter().filter(|p| p.kind() == kind).collect()
    }

    pub fn count(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Classify every pet and tally the statuses
    pub fn health_census(&self) -> HealthCensus {
        let mut census = HealthCensus::default();
        for pet in &self.pets {
            match HealthStrategyFactory::calculate_health(pet) {
                HealthStatus::Unhealthy => census.unhealthy += 1,
                HealthStatus::Healthy => census.healthy += 1,
                HealthStatus::VeryHealthy => census.very_healthy += 1,
            }
        }
        census
    }

    /// Development seed set - real records so the CLI and tests run offline
    fn register_seed_pets(&mut self) {
        self.register(
            Pet::new(1, "Max", Species::Dog, 25000.0, 60.0, 90.0)
                .with_photo_url("https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400")
                .with_description(
                    "A friendly and energetic golden retriever who loves to play fetch and swim.",
                ),
        );
        self.register(
            Pet::new(2, "Luna", Species::Cat { number_of_lives: 7 }, 4500.0, 25.0, 45.0)
                .with_photo_url("https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400")
                .with_description(
                    "An elegant grey tabby with striking green eyes. Very independent but affectionate.",
                ),
        );
        self.register(
            Pet::new(3, "Charlie", Species::Dog, 30000.0, 65.0, 95.0)
                .with_photo_url("https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=400")
                .with_description(
                    "A loyal German Shepherd with excellent training and protective instincts.",
                ),
        );
        self.register(
            Pet::new(4, "Bella", Species::Cat { number_of_lives: 9 }, 3800.0, 23.0, 40.0)
                .with_photo_url("https://images.unsplash.com/photo-1573865526739-10c1dd7e99e2?w=400")
                .with_description("A playful Siamese cat who enjoys climbing and interactive toys."),
        );
        self.register(
            Pet::new(
                5,
                "Tweety",
                Species::Bird {
                    wingspan: 25.0,
                    num_of_feathers: 2500,
                },
                150.0,
                15.0,
                20.0,
            )
            .with_photo_url("https://images.unsplash.com/photo-1552728089-57bdde30beb3?w=400")
            .with_description(
                "A cheerful canary with a beautiful yellow plumage and melodious song.",
            ),
        );
        self.register(
            Pet::new(6, "Rocky", Species::Dog, 35000.0, 70.0, 100.0)
                .with_photo_url("https://images.unsplash.com/photo-1561037404-61cd46aa615b?w=400")
                .with_description(
                    "A strong and athletic boxer with boundless energy and a gentle temperament.",
                ),
        );
        self.register(
            Pet::new(7, "Whiskers", Species::Cat { number_of_lives: 8 }, 5200.0, 28.0, 48.0)
                .with_photo_url("https://images.unsplash.com/photo-1529778873920-4da4926a72c2?w=400")
                .with_description(
                    "A fluffy Persian cat with long fur and a calm, relaxed personality.",
                ),
        );
        self.register(
            Pet::new(
                8,
                "Blue",
                Species::Bird {
                    wingspan: 28.0,
                    num_of_feathers: 3000,
                },
                180.0,
                18.0,
                22.0,
            )
            .with_photo_url("https://images.unsplash.com/photo-1544923408-75c5cef46f14?w=400")
            .with_description(
                "A vibrant blue budgie who loves to mimic sounds and play with mirrors.",
            ),
        );
        self.register(
            Pet::new(
                9,
                "Kiwi",
                Species::Bird {
                    wingspan: 20.0,
                    num_of_feathers: 1800,
                },
                95.0,
                12.0,
                15.0,
            )
            .with_photo_url("https://images.unsplash.com/photo-1581985673473-0784a7a44e39?w=400")
            .with_description(
                "A small green parakeet with a curious personality and love for treats.",
            ),
        );
        self.register(
            Pet::new(10, "Daisy", Species::Dog, 18000.0, 50.0, 75.0)
                .with_photo_url("https://images.unsplash.com/photo-1558788353-f76d92427f16?w=400")
                .with_description(
                    "A sweet beagle with an incredible sense of smell and adventurous spirit.",
                ),
        );
    }
}

impl Default for PetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog() {
        let catalog = PetCatalog::new();
        assert_eq!(catalog.count(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.find_by_id(1).is_none());
        assert_eq!(catalog.health_census(), HealthCensus::default());
    }

    #[test]
    fn test_seed_catalog_contents() {
        let catalog = PetCatalog::with_seed_pets();

        assert_eq!(catalog.count(), 10);
        assert_eq!(catalog.by_kind("dog").len(), 4);
        assert_eq!(catalog.by_kind("cat").len(), 3);
        assert_eq!(catalog.by_kind("bird").len(), 3);
        assert_eq!(catalog.by_kind("hamster").len(), 0);
    }

    #[test]
    fn test_find_by_id() {
        let catalog = PetCatalog::with_seed_pets();

        let luna = catalog.find_by_id(2).unwrap();
        assert_eq!(luna.name, "Luna");
        assert_eq!(luna.number_of_lives(), Some(7));

        assert!(catalog.find_by_id(999).is_none());
    }

    #[test]
    fn test_seed_pets_are_well_formed() {
        let catalog = PetCatalog::with_seed_pets();
        for pet in catalog.all_pets() {
            assert!(pet.validate().is_ok(), "seed pet {} invalid", pet.id);
        }
    }

    #[test]
    fn test_seed_census() {
        // Dogs and cats all land in the healthy band; every seed bird has a
        // wingspan ratio under 1.5, so the census is fixed
        let census = PetCatalog::with_seed_pets().health_census();

        assert_eq!(census.healthy, 7);
        assert_eq!(census.unhealthy, 3);
        assert_eq!(census.very_healthy, 0);
        assert_eq!(census.total(), 10);
    }

    #[test]
    fn test_census_summary() {
        let census = HealthCensus {
            unhealthy: 3,
            healthy: 7,
            very_healthy: 0,
        };
        assert_eq!(
            census.summary(),
            "10 pets: 0 very healthy, 7 healthy, 3 unhealthy"
        );
    }

    #[test]
    fn test_from_json() {
        let catalog = PetCatalog::from_json(
            r#"[
                {"id":1,"name":"Rex","kind":"dog","weight":200,"height":50,
                 "length":2,"photo_url":"rex.jpg","description":""},
                {"id":2,"name":"Tom","kind":"cat","number_of_lives":1,
                 "weight":300,"height":50,"length":2,
                 "photo_url":"tom.jpg","description":""}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.count(), 2);

        let census = catalog.health_census();
        assert_eq!(census.very_healthy, 1); // Rex: ratio 2.0
        assert_eq!(census.unhealthy, 1); // Tom: one life
    }

    #[test]
    fn test_from_json_rejects_malformed_documents() {
        assert!(PetCatalog::from_json("not json").is_err());
        // Unknown kinds fail at construction, not inside the engine
        assert!(PetCatalog::from_json(
            r#"[{"id":1,"name":"Nibbles","kind":"hamster","weight":40,
                 "height":5,"length":8,"photo_url":"","description":""}]"#
        )
        .is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("pet_catalog_from_file_test.json");
        fs::write(
            &path,
            r#"[{"id":1,"name":"Rex","kind":"dog","weight":200,"height":50,
                 "length":2,"photo_url":"rex.jpg","description":""}]"#,
        )
        .unwrap();

        let catalog = PetCatalog::from_file(&path).unwrap();
        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.find_by_id(1).unwrap().name, "Rex");

        fs::remove_file(&path).ok();

        assert!(PetCatalog::from_file("/nonexistent/pets.json").is_err());
    }
}
