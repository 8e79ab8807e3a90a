// crates/countrydb-core/src/loader/raw.rs
use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw native name as it appears in the source JSON.
#[derive(Debug, Default, Deserialize)]
pub struct NativeNameRaw {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Raw name block:
/// {
///   "common": "France",
///   "official": "French Republic",
///   "native": { "fra": { "common": "France", "official": "République française" } }
/// }
#[derive(Debug, Deserialize)]
pub struct NameRaw {
    pub common: String,
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub native: BTreeMap<String, NativeNameRaw>,
}

/// Raw subdivision entry.
#[derive(Debug, Deserialize)]
pub struct SubdivisionRaw {
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Raw country structure from JSON.
///
/// Borders may be given as alpha-2 or alpha-3 codes; the converter
/// normalizes them to alpha-2.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    pub alpha2: String,
    #[serde(default)]
    pub alpha3: Option<String>,
    #[serde(default)]
    pub ccn3: Option<String>,
    #[serde(default)]
    pub capital: Option<String>,
    #[serde(default)]
    pub continent: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    /// `[latitude, longitude]`
    #[serde(default)]
    pub latlng: Vec<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub international_prefix: Option<String>,
    #[serde(default)]
    pub calling_codes: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub subdivisions: Vec<SubdivisionRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;
