//! Advanced filtering example for countrydb-rs
//!
//! This example demonstrates structural filtering with partially filled
//! `Country` templates.

use countrydb_rs::prelude::*;

fn print(title: &str, countries: &[&Country]) {
    println!("--- {title} ---");
    println!("Found {} countries:", countries.len());
    for country in countries {
        println!("- {} ({})", country.name(), country.alpha2());
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== countrydb-rs Advanced Filtering Example ===\n");

    let q = Query::shared()?;

    // Example 1: Everything on one continent
    let europe = Country {
        geo: Geo {
            continent: "europe".into(),
            ..Default::default()
        },
        ..Default::default()
    };
    print("Example 1: Countries in Europe", &q.find_countries(&europe));

    // Example 2: Combine geography with borders
    let southern_neighbours_of_france = Country {
        geo: Geo {
            subregion: "Southern Europe".into(),
            ..Default::default()
        },
        borders: vec!["FR".into()],
        ..Default::default()
    };
    print(
        "Example 2: Southern European neighbours of France",
        &q.find_countries(&southern_neighbours_of_france),
    );

    // Example 3: Countries bordering both Germany and France
    let both = Country {
        borders: vec!["DE".into(), "FR".into()],
        ..Default::default()
    };
    print("Example 3: Bordering both DE and FR", &q.find_countries(&both));

    // Example 4: Same dialling prefix
    let prefix = Country {
        international_prefix: "011".into(),
        ..Default::default()
    };
    print("Example 4: International prefix 011", &q.find_countries(&prefix));

    // Example 5: Custom predicates on top of the filter
    println!("--- Example 5: Euro users larger than 300,000 km² ---");
    let euro = q.find_countries_by_currency("EUR")?;
    for country in euro.iter().filter(|c| c.geo.area > 300_000.0) {
        println!("- {} ({:.0} km²)", country.name(), country.geo.area);
    }
    println!();

    Ok(())
}
