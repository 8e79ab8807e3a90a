// crates/countrydb-core/src/model.rs
use crate::text::{equals_folded, fold_lower};
use crate::traits::{Coordinates, NameMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A name in one of the country's official languages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NativeName {
    pub common: String,
    pub official: String,
}

/// English names plus native names keyed by ISO 639-3 language code.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    pub official: String,
    pub native: BTreeMap<String, NativeName>,
}

/// Geographic attributes of a country.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub continent: String,
    pub region: String,
    pub subregion: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Surface area in km².
    pub area: f64,
}

/// A named administrative region within a country (state, province, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Subdivision {
    pub name: String,
    /// Code without the country prefix, e.g. "BY" for Bavaria.
    pub code: String,
    /// Kind as given by the dataset, e.g. "state" or "province".
    pub kind: String,
    /// Alternative spellings and translations.
    pub names: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// A country record. Immutable once handed to [`crate::Query`].
///
/// Every field defaults to its empty value, which lets a partially filled
/// record double as a filter template:
///
/// ```rust
/// use countrydb_core::model::{Country, Geo};
///
/// let template = Country {
///     geo: Geo { continent: "Europe".into(), ..Default::default() },
///     ..Default::default()
/// };
/// assert!(template.alpha2.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    /// Canonical key, uppercase ISO 3166-1 alpha-2.
    pub alpha2: String,
    pub alpha3: String,
    /// ISO 3166-1 numeric code, kept as text to preserve leading zeros.
    pub ccn3: String,
    pub capital: String,
    pub geo: Geo,
    /// Prefix dialled to call abroad from this country, e.g. "00".
    pub international_prefix: String,
    /// Country calling codes without the leading `+`.
    pub calling_codes: Vec<String>,
    /// ISO 4217 currency codes.
    pub currencies: Vec<String>,
    pub tlds: Vec<String>,
    /// Language code -> language name.
    pub languages: BTreeMap<String, String>,
    /// Alpha-2 codes of neighbouring countries. Resolved on demand through
    /// [`crate::Query::bordering_countries`].
    pub borders: Vec<String>,
    /// Subdivisions keyed by lowercased name.
    pub subdivisions: BTreeMap<String, Subdivision>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name.common
    }

    pub fn official_name(&self) -> &str {
        &self.name.official
    }

    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    pub fn capital(&self) -> Option<&str> {
        Some(self.capital.as_str()).filter(|c| !c.is_empty())
    }

    pub fn continent(&self) -> &str {
        &self.geo.continent
    }

    pub fn region(&self) -> &str {
        &self.geo.region
    }

    pub fn subregion(&self) -> &str {
        &self.geo.subregion
    }

    pub fn borders(&self) -> &[String] {
        &self.borders
    }

    /// Native common names across all languages, in language-code order.
    pub fn native_names(&self) -> impl Iterator<Item = &str> {
        self.name.native.values().map(|n| n.common.as_str())
    }

    /// Subdivisions in name order.
    pub fn subdivisions(&self) -> impl Iterator<Item = &Subdivision> {
        self.subdivisions.values()
    }

    /// Adds a subdivision under its lowercased name, replacing any previous
    /// entry with the same key.
    pub fn insert_subdivision(&mut self, subdivision: Subdivision) {
        self.subdivisions
            .insert(fold_lower(&subdivision.name), subdivision);
    }

    /// Finds a subdivision by primary or alternative name, case-insensitive.
    pub fn find_subdivision_by_name(&self, name: &str) -> Option<&Subdivision> {
        self.subdivisions.get(&fold_lower(name)).or_else(|| {
            self.subdivisions
                .values()
                .find(|s| s.names.iter().any(|n| equals_folded(n, name)))
        })
    }

    /// Finds a subdivision by code, case-insensitive.
    ///
    /// Accepts both the bare code ("BY") and the ISO 3166-2 form ("DE-BY").
    pub fn find_subdivision_by_code(&self, code: &str) -> Option<&Subdivision> {
        let bare = match code.split_once('-') {
            Some((prefix, rest)) if prefix.eq_ignore_ascii_case(&self.alpha2) => rest,
            _ => code,
        };
        self.subdivisions
            .values()
            .find(|s| s.code.eq_ignore_ascii_case(bare))
    }

    /// True when the lowercased subdivision index holds `name`.
    pub(crate) fn has_subdivision_key(&self, lowered: &str) -> bool {
        self.subdivisions.contains_key(lowered)
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.name.common
    }
}

impl Coordinates for Country {
    fn latitude(&self) -> f64 {
        self.geo.latitude
    }
    fn longitude(&self) -> f64 {
        self.geo.longitude
    }
}

impl Subdivision {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

impl NameMatch for Subdivision {
    fn name_str(&self) -> &str {
        &self.name
    }

    /// Alternative names count as a match too.
    fn is_named(&self, q: &str) -> bool {
        equals_folded(&self.name, q) || self.names.iter().any(|n| equals_folded(n, q))
    }
}

impl Coordinates for Subdivision {
    fn latitude(&self) -> f64 {
        self.latitude
    }
    fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn germany() -> Country {
        let mut de = Country {
            alpha2: "DE".into(),
            alpha3: "DEU".into(),
            ..Default::default()
        };
        de.insert_subdivision(Subdivision {
            name: "Bavaria".into(),
            code: "BY".into(),
            kind: "state".into(),
            names: vec!["Bayern".into()],
            ..Default::default()
        });
        de.insert_subdivision(Subdivision {
            name: "Berlin".into(),
            code: "BE".into(),
            kind: "state".into(),
            ..Default::default()
        });
        de
    }

    #[test]
    fn subdivisions_are_keyed_by_lowercased_name() {
        let de = germany();
        assert!(de.has_subdivision_key("bavaria"));
        assert!(!de.has_subdivision_key("Bavaria"));
        assert_eq!(de.subdivisions().count(), 2);
    }

    #[test]
    fn subdivision_lookup_by_name_and_alias() {
        let de = germany();
        assert_eq!(de.find_subdivision_by_name("BAVARIA").map(|s| s.code()), Some("BY"));
        assert_eq!(de.find_subdivision_by_name("bayern").map(|s| s.code()), Some("BY"));
        assert!(de.find_subdivision_by_name("Tyrol").is_none());
    }

    #[test]
    fn subdivision_lookup_by_code() {
        let de = germany();
        assert_eq!(de.find_subdivision_by_code("be").map(|s| s.name()), Some("Berlin"));
        assert_eq!(de.find_subdivision_by_code("DE-BY").map(|s| s.name()), Some("Bavaria"));
        assert!(de.find_subdivision_by_code("FR-BY").is_none());
    }

    #[test]
    fn empty_capital_reads_as_none() {
        assert_eq!(Country::default().capital(), None);
    }
}
