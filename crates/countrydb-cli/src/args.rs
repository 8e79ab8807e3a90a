use clap::{Args, Parser, Subcommand};

/// CLI arguments for countrydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "CLI for querying the countrydb-core country reference data"
)]
pub struct CliArgs {
    /// Dataset path (.json, .bin, optionally .gz). Defaults to $COUNTRYDB_DATA or the bundled dataset
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Optional comma-separated list of alpha-2 codes to load (e.g. DE,CH,AT)
    #[arg(short = 'f', long = "filter", global = true)]
    pub filter: Option<String>,

    /// Log loader activity to stderr (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded data
    Stats,

    /// List all countries
    Countries,

    /// Lookup a country by alpha-2 or alpha-3 code
    Country {
        /// Alpha-2 or alpha-3 code (e.g. DE, usa)
        code: String,
    },

    /// Lookup a country by its common English name
    Name {
        name: String,
        /// Search native names instead
        #[arg(long)]
        native: bool,
    },

    /// Lookup a country by calling code (digits only, e.g. 49)
    CallingCode { code: String },

    /// List countries using an ISO 4217 currency
    Currency { code: String },

    /// Find the country containing a subdivision
    Subdivision { name: String },

    /// List the neighbours of a country
    Borders { code: String },

    /// List countries matching every given field
    Filter(FilterArgs),

    /// Write the loaded data as a bincode snapshot (.bin or .bin.gz)
    Snapshot { output: String },
}

#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Common name, case-insensitive
    #[arg(long)]
    pub name: Option<String>,
    /// Alpha-2 code, exact
    #[arg(long)]
    pub alpha2: Option<String>,
    /// Alpha-3 code, exact
    #[arg(long)]
    pub alpha3: Option<String>,
    #[arg(long)]
    pub continent: Option<String>,
    #[arg(long)]
    pub region: Option<String>,
    #[arg(long)]
    pub subregion: Option<String>,
    /// International dialling prefix (e.g. 00)
    #[arg(long)]
    pub prefix: Option<String>,
    /// Alpha-2 codes that must all be neighbours (comma-separated or repeated)
    #[arg(long = "border", value_delimiter = ',')]
    pub borders: Vec<String>,
}
