// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates to the
//! payload parsers: source JSON (`.json`, feature `json`) or bincode
//! snapshots (`.bin`). Either may carry a trailing `.gz` (feature
//! `compact`).
//!
//! The query engine never touches the filesystem; everything here ends in
//! [`Query::from_countries`].

use crate::error::{GeoError, Result};
use crate::model::Country;
use crate::query::Query;
use once_cell::sync::OnceCell;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod snapshot;

#[cfg(feature = "json")]
pub mod convert;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "json")]
pub mod raw;

pub use common_io::CompressionMode;

/// Environment variable overriding the default dataset location.
pub const DATA_ENV_VAR: &str = "COUNTRYDB_DATA";

// Single in-process instance so the dataset is parsed at most once.
static SHARED_QUERY: OnceCell<Query> = OnceCell::new();

/// Payload kind, decided from the file name with any `.gz` removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload {
    Json,
    Snapshot,
}

fn payload_for(path: &Path) -> Result<Payload> {
    let inner = match CompressionMode::for_path(path) {
        CompressionMode::Gzip => path.file_stem().map(Path::new),
        CompressionMode::None => Some(path),
    };

    match inner.and_then(Path::extension).and_then(OsStr::to_str) {
        Some("json") => Ok(Payload::Json),
        Some("bin") => Ok(Payload::Snapshot),
        _ => Err(GeoError::InvalidData(format!(
            "Unrecognized dataset format: {} (expected .json, .bin, optionally .gz)",
            path.display()
        ))),
    }
}

/// Reads records from `path` without building indices.
pub fn read_countries(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    let path = path.as_ref();
    let payload = payload_for(path)?;
    tracing::debug!(path = %path.display(), ?payload, "Loading dataset");

    let reader = common_io::open_stream(path)?;
    match payload {
        Payload::Snapshot => snapshot::read(reader),
        #[cfg(feature = "json")]
        Payload::Json => json::load_from_reader(reader),
        #[cfg(not(feature = "json"))]
        Payload::Json => Err(GeoError::InvalidData(format!(
            "{} is JSON but the 'json' feature is disabled",
            path.display()
        ))),
    }
}

/// Keeps only the countries whose alpha-2 code is listed in `filter`
/// (case-insensitive). `None` keeps everything.
fn apply_filter(countries: Vec<Country>, filter: Option<&[&str]>) -> Vec<Country> {
    match filter {
        None => countries,
        Some(codes) => countries
            .into_iter()
            .filter(|c| codes.iter().any(|code| code.eq_ignore_ascii_case(&c.alpha2)))
            .collect(),
    }
}

impl Query {
    /// Directory of the dataset shipped with this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// `$COUNTRYDB_DATA` if set, else the bundled dataset.
    pub fn default_dataset_path() -> PathBuf {
        std::env::var_os(DATA_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    /// Loads a dataset and builds the engine.
    ///
    /// `filter` restricts the engine to the listed alpha-2 codes. Borders
    /// pointing at filtered-out countries stay on the records and are
    /// skipped by [`Query::bordering_countries`].
    pub fn load_from_path(path: impl AsRef<Path>, filter: Option<&[&str]>) -> Result<Self> {
        let countries = apply_filter(read_countries(path)?, filter);
        let query = Query::from_countries(countries);
        tracing::info!(countries = query.len(), "Built country index");
        Ok(query)
    }

    /// Parses source JSON from any reader and builds the engine.
    #[cfg(feature = "json")]
    pub fn load_json<R: std::io::Read>(reader: R) -> Result<Self> {
        let query = Query::from_countries(json::load_from_reader(reader)?);
        tracing::info!(countries = query.len(), "Built country index");
        Ok(query)
    }

    /// The process-wide engine over [`Query::default_dataset_path`].
    ///
    /// Initialization runs once even under concurrent first access; a failed
    /// load is not cached and is retried by the next caller.
    pub fn shared() -> Result<&'static Query> {
        SHARED_QUERY.get_or_try_init(|| Self::load_from_path(Self::default_dataset_path(), None))
    }

    /// Like [`Query::shared`], loading from `path` if nothing has been
    /// initialized yet. Once set, the shared instance never changes and
    /// `path` is ignored.
    pub fn shared_from_path(path: impl AsRef<Path>) -> Result<&'static Query> {
        SHARED_QUERY.get_or_try_init(|| Self::load_from_path(path, None))
    }

    /// Writes the records as a bincode snapshot, gzip compressed when
    /// `path` ends in `.gz`.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        snapshot::write(path, self.countries(), CompressionMode::for_path(path))?;
        tracing::info!(path = %path.display(), countries = self.len(), "Wrote snapshot");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_taken_from_the_inner_extension() {
        assert_eq!(payload_for(Path::new("countries.json")).unwrap(), Payload::Json);
        assert_eq!(payload_for(Path::new("countries.json.gz")).unwrap(), Payload::Json);
        assert_eq!(payload_for(Path::new("countries.bin.gz")).unwrap(), Payload::Snapshot);
        assert!(matches!(
            payload_for(Path::new("countries.yaml")),
            Err(GeoError::InvalidData(_))
        ));
    }

    #[test]
    fn filter_is_case_insensitive() {
        let countries = vec![
            Country {
                alpha2: "FR".into(),
                ..Default::default()
            },
            Country {
                alpha2: "DE".into(),
                ..Default::default()
            },
        ];
        let kept = apply_filter(countries, Some(&["fr"][..]));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].alpha2, "FR");
    }
}
