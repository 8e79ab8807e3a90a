//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country dataset
//! - Look countries up by code, name, calling code and currency
//! - Resolve neighbours and subdivisions

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Basic Usage Example ===\n");

    println!("Loading country dataset...");
    let q = Query::shared()?;
    println!("✓ Dataset loaded successfully\n");

    // Example 1: Get all countries
    println!("--- Example 1: List all countries ---");
    let countries = q.find_all_countries();
    println!("Total countries: {}", countries.len());
    for (i, country) in countries.values().take(5).enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.alpha2());
    }
    println!();

    // Example 2: Find a specific country
    println!("--- Example 2: Find country by alpha-2 or alpha-3 code ---");
    let us = q.find_country_by_alpha("usa")?;
    println!("Found: {}", us.name());
    println!("Alpha2: {}", us.alpha2());
    println!("Alpha3: {}", us.alpha3());
    println!("Calling codes: {:?}", us.calling_codes);
    println!("Currencies: {:?}", us.currencies);
    println!("Number of subdivisions: {}", us.subdivisions.len());
    println!();

    // Example 3: Names and native names
    println!("--- Example 3: Lookup by name ---");
    println!("'GERMANY' -> {}", q.find_country_by_name("GERMANY")?.alpha2());
    println!("'Svizzera' -> {}", q.find_country_by_native_name("Svizzera")?.name());
    println!();

    // Example 4: Calling code and currency
    println!("--- Example 4: Calling code and currency ---");
    println!("+41 -> {}", q.find_country_by_calling_code("41")?.name());
    for country in q.find_countries_by_currency("USD")? {
        println!("USD is used in {}", country.name());
    }
    println!();

    // Example 5: Neighbours and subdivisions
    println!("--- Example 5: Neighbours and subdivisions ---");
    let de = q.find_country_by_alpha("DE")?;
    for neighbour in q.bordering_countries(de) {
        println!(
            "{} borders {} ({:.0} km between centroids)",
            de.name(),
            neighbour.name(),
            de.distance_to(neighbour)
        );
    }
    let owner = q.find_subdivision_country_by_name("Texas")?;
    println!("Texas is in {}", owner.name());

    Ok(())
}
