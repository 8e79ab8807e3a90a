//! Error handling example for countrydb-rs
//!
//! This example demonstrates the typed lookup errors and how to branch on
//! them.

use countrydb_rs::prelude::*;

fn describe(result: QueryResult<&Country>) {
    match result {
        Ok(country) => println!("  Found: {} ({})", country.name(), country.alpha2()),
        Err(QueryError::NotFound { field, value }) => {
            println!("  Not found: no country with {field} {value:?}")
        }
        Err(QueryError::InvalidFormat { field, value }) => {
            println!("  Invalid {field}: {value:?}")
        }
    }
}

fn main() -> Result<()> {
    println!("=== countrydb-rs Error Handling Example ===\n");

    // Example 1: Handling dataset load errors
    println!("--- Example 1: Loading a dataset with error handling ---");
    match Query::load_from_path("does/not/exist.json", None) {
        Ok(q) => println!("✓ Loaded {} countries", q.len()),
        Err(e) => println!("✗ Failed to load dataset: {e}"),
    }
    println!();

    let q = Query::shared()?;

    // Example 2: Missing countries
    println!("--- Example 2: Searching for non-existent countries ---");
    for code in ["XX", "YYY"] {
        describe(q.find_country_by_alpha(code));
    }
    println!();

    // Example 3: Malformed codes
    println!("--- Example 3: Handling invalid codes ---");
    for code in ["", "A", "ABCD"] {
        describe(q.find_country_by_alpha(code));
    }
    match q.find_countries_by_currency("EU") {
        Ok(countries) => println!("  {} countries", countries.len()),
        Err(e) => println!("  {e}"),
    }
    println!();

    // Example 4: Empty filter results are not errors
    println!("--- Example 4: Filter with no matches ---");
    let template = Country {
        alpha2: "fr".into(),
        ..Default::default()
    };
    println!("  Matches for lowercase alpha2: {}", q.find_countries(&template).len());

    // Example 5: Propagating with `?`
    println!("--- Example 5: Propagating errors ---");
    let japan = q.find_country_by_name("japan")?;
    println!("  Found {}", japan.name());

    Ok(())
}
