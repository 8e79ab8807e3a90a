//! countrydb-cli: command-line interface for countrydb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ countrydb stats
//!
//! - Lookup by code, name, calling code or currency
//!   $ countrydb country deu
//!   $ countrydb name --native "Österreich"
//!   $ countrydb calling-code 41
//!   $ countrydb currency eur
//!
//! - Structural filter; every flag given must match
//!   $ countrydb filter --subregion "western europe" --border DE,FR
//!
//! Data source
//! -----------
//!
//! By default the CLI loads `$COUNTRYDB_DATA`, falling back to the dataset
//! bundled with `countrydb-core`. Use `--input <path>` to point at another
//! `.json`/`.bin` file (optionally `.gz`) and `--filter <A2,A2,...>` to load
//! only some countries.
mod args;

use crate::args::{CliArgs, Commands, FilterArgs};
use clap::Parser;
use countrydb_core::{Country, CountryName, Geo, Query};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Turns the filter flags into a template; absent flags stay empty.
fn template(args: FilterArgs) -> Country {
    Country {
        name: CountryName {
            common: args.name.unwrap_or_default(),
            ..Default::default()
        },
        alpha2: args.alpha2.unwrap_or_default(),
        alpha3: args.alpha3.unwrap_or_default(),
        geo: Geo {
            continent: args.continent.unwrap_or_default(),
            region: args.region.unwrap_or_default(),
            subregion: args.subregion.unwrap_or_default(),
            ..Default::default()
        },
        international_prefix: args.prefix.unwrap_or_default(),
        borders: args
            .borders
            .into_iter()
            .map(|b| b.trim().to_owned())
            .filter(|b| !b.is_empty())
            .collect(),
        ..Default::default()
    }
}

fn print_list<'a>(countries: impl IntoIterator<Item = &'a Country>) {
    for c in countries {
        println!("{} ({})", c.name(), c.alpha2());
    }
}

fn print_details(q: &Query, c: &Country) {
    println!("Country: {}", c.name());
    println!("Official: {}", c.official_name());
    println!("Alpha2: {}", c.alpha2());
    println!("Alpha3: {}", c.alpha3());
    println!("Capital: {:?}", c.capital());
    println!("Continent: {}", c.continent());
    println!("Region: {} / {}", c.region(), c.subregion());
    println!("Calling codes: {}", c.calling_codes.join(", "));
    println!("International prefix: {}", c.international_prefix);
    println!("Currencies: {}", c.currencies.join(", "));
    let neighbours: Vec<&str> = q.bordering_countries(c).into_iter().map(Country::name).collect();
    println!("Borders: {}", neighbours.join(", "));
    println!("Subdivisions: {}", c.subdivisions.len());
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let input_path = args
        .input
        .map(std::path::PathBuf::from)
        .unwrap_or_else(Query::default_dataset_path);

    // Parse filter if provided
    let iso_filter: Option<Vec<&str>> = args.filter.as_ref().map(|s| {
        s.split(',')
            .map(|x| x.trim())
            .filter(|x| !x.is_empty())
            .collect()
    });

    let q = Query::load_from_path(&input_path, iso_filter.as_deref())?;
    tracing::debug!(path = %input_path.display(), countries = q.len(), "Dataset ready");

    match args.command {
        Commands::Stats => {
            let stats = q.stats();
            println!("Database statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Subdivisions: {}", stats.subdivisions);
            println!("  Currencies: {}", stats.currencies);
            println!("  Calling codes: {}", stats.calling_codes);
        }

        Commands::Countries => print_list(q.find_all_countries().values()),

        Commands::Country { code } => print_details(&q, q.find_country_by_alpha(&code)?),

        Commands::Name { name, native } => {
            let c = if native {
                q.find_country_by_native_name(&name)?
            } else {
                q.find_country_by_name(&name)?
            };
            print_details(&q, c);
        }

        Commands::CallingCode { code } => {
            let code = code.trim_start_matches('+');
            print_details(&q, q.find_country_by_calling_code(code)?);
        }

        Commands::Currency { code } => print_list(q.find_countries_by_currency(&code)?),

        Commands::Subdivision { name } => {
            let c = q.find_subdivision_country_by_name(&name)?;
            if let Some(s) = c.find_subdivision_by_name(&name) {
                println!("{} ({}), {}", s.name(), s.code(), s.kind);
            }
            println!("Country: {} ({})", c.name(), c.alpha2());
        }

        Commands::Borders { code } => {
            let c = q.find_country_by_alpha(&code)?;
            print_list(q.bordering_countries(c));
        }

        Commands::Filter(filter) => {
            let matches = q.find_countries(&template(filter));
            if matches.is_empty() {
                println!("No countries match");
            } else {
                print_list(matches);
            }
        }

        Commands::Snapshot { output } => {
            q.save_snapshot(&output)?;
            println!("Wrote {} countries to {output}", q.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flags_leave_template_empty() {
        assert_eq!(template(FilterArgs::default()), Country::default());
    }

    #[test]
    fn borders_are_trimmed() {
        let t = template(FilterArgs {
            continent: Some("Europe".into()),
            borders: vec![" DE".into(), "".into(), "FR ".into()],
            ..Default::default()
        });
        assert_eq!(t.geo.continent, "Europe");
        assert_eq!(t.borders, ["DE", "FR"]);
    }

    #[test]
    fn cli_parses_filter_flags() {
        let args = CliArgs::try_parse_from([
            "countrydb",
            "filter",
            "--continent",
            "europe",
            "--border",
            "DE,FR",
        ])
        .unwrap();
        match args.command {
            Commands::Filter(f) => {
                assert_eq!(f.continent.as_deref(), Some("europe"));
                assert_eq!(f.borders, ["DE", "FR"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
