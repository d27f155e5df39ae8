// Pet Catalog - CLI health report
// Classifies every pet in the catalog and prints a census

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

use pet_catalog::{HealthStrategyFactory, PetCatalog};

fn main() -> Result<()> {
    // Factory fallback warnings go through tracing; default to info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let catalog = if args.len() > 1 {
        PetCatalog::from_file(&args[1])?
    } else {
        PetCatalog::with_seed_pets()
    };

    println!("🐾 Pet Catalog - {} pets", catalog.count());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    for pet in catalog.all_pets() {
        let status = HealthStrategyFactory::calculate_health(pet);
        println!(
            "{:>4}  {:<12} {:<5} {}",
            pet.id,
            pet.name,
            pet.kind(),
            status
        );
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{}", catalog.health_census().summary());

    Ok(())
}
