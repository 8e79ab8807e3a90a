// crates/countrydb-core/src/query.rs

//! # Query Engine
//!
//! Owns the country records and the indices derived from them. Indices are
//! built once in [`Query::new`] and never touched again, so a `Query` can be
//! shared across threads by reference without locking.
//!
//! Index keys are folded (names lowercased, codes uppercased) and every
//! index value is the alpha-2 key of a record held by the same engine.

use crate::common::DbStats;
use crate::error::{LookupField, QueryError};
use crate::model::Country;
use crate::text::{fold_lower, fold_upper};
use std::collections::{BTreeMap, HashMap};

pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// Read-only lookup engine over a set of countries.
///
/// The primary store is ordered by alpha-2 code; every scan
/// ([`Query::find_countries`], [`Query::find_subdivision_country_by_name`])
/// visits countries in that order. When two countries share a key in a
/// single-valued index (e.g. a calling code), the first one in alpha-2 order
/// owns the entry.
#[derive(Clone, Debug, Default)]
pub struct Query {
    countries: BTreeMap<String, Country>,
    name_to_alpha2: HashMap<String, String>,
    alpha3_to_alpha2: HashMap<String, String>,
    native_name_to_alpha2: HashMap<String, String>,
    calling_code_to_alpha2: HashMap<String, String>,
    currency_to_alpha2: HashMap<String, Vec<String>>,
}

impl Query {
    /// Builds the engine from a map of alpha-2 code to country.
    ///
    /// Keys are uppercased; the records themselves are taken as-is.
    pub fn new(countries: impl IntoIterator<Item = (String, Country)>) -> Self {
        let countries: BTreeMap<String, Country> = countries
            .into_iter()
            .map(|(code, country)| (fold_upper(&code), country))
            .collect();

        let mut query = Query {
            countries,
            ..Default::default()
        };
        query.build_indices();
        query
    }

    /// Builds the engine from bare records, keyed by their own alpha-2 code.
    pub fn from_countries(countries: impl IntoIterator<Item = Country>) -> Self {
        Self::new(countries.into_iter().map(|c| (c.alpha2.clone(), c)))
    }

    fn build_indices(&mut self) {
        for (code, country) in &self.countries {
            if !country.name.common.is_empty() {
                self.name_to_alpha2
                    .entry(fold_lower(&country.name.common))
                    .or_insert_with(|| code.clone());
            }

            if !country.alpha3.is_empty() {
                self.alpha3_to_alpha2
                    .entry(fold_upper(&country.alpha3))
                    .or_insert_with(|| code.clone());
            }

            for native in country.native_names().filter(|n| !n.is_empty()) {
                self.native_name_to_alpha2
                    .entry(fold_lower(native))
                    .or_insert_with(|| code.clone());
            }

            for calling_code in country.calling_codes.iter().filter(|c| !c.is_empty()) {
                self.calling_code_to_alpha2
                    .entry(calling_code.clone())
                    .or_insert_with(|| code.clone());
            }

            for currency in country.currencies.iter().filter(|c| !c.is_empty()) {
                let holders = self.currency_to_alpha2.entry(fold_upper(currency)).or_default();
                // a country listing the same currency twice still counts once
                if holders.last() != Some(code) {
                    holders.push(code.clone());
                }
            }
        }
    }

    /// Resolves an index value against the primary store.
    fn resolve(&self, alpha2: Option<&String>, field: LookupField, input: &str) -> QueryResult<&Country> {
        alpha2
            .and_then(|code| self.countries.get(code))
            .ok_or_else(|| QueryError::not_found(field, input))
    }

    /// Finds a country by its common English name, case-insensitive.
    pub fn find_country_by_name(&self, name: &str) -> QueryResult<&Country> {
        let alpha2 = self.name_to_alpha2.get(&fold_lower(name));
        self.resolve(alpha2, LookupField::Name, name)
    }

    /// Finds a country by any of its native common names, case-insensitive.
    pub fn find_country_by_native_name(&self, name: &str) -> QueryResult<&Country> {
        let alpha2 = self.native_name_to_alpha2.get(&fold_lower(name));
        self.resolve(alpha2, LookupField::NativeName, name)
    }

    /// Finds a country by alpha-2 or alpha-3 code, case-insensitive.
    ///
    /// The input length picks the index; any length other than 2 or 3 is an
    /// [`QueryError::InvalidFormat`].
    pub fn find_country_by_alpha(&self, code: &str) -> QueryResult<&Country> {
        let upper = fold_upper(code);
        match code.chars().count() {
            2 => self.resolve(Some(&upper), LookupField::Alpha, code),
            3 => {
                let alpha2 = self.alpha3_to_alpha2.get(&upper);
                self.resolve(alpha2, LookupField::Alpha, code)
            }
            _ => Err(QueryError::invalid_format(LookupField::Alpha, code)),
        }
    }

    /// Finds a country by calling code. The code is matched verbatim.
    pub fn find_country_by_calling_code(&self, calling_code: &str) -> QueryResult<&Country> {
        let alpha2 = self.calling_code_to_alpha2.get(calling_code);
        self.resolve(alpha2, LookupField::CallingCode, calling_code)
    }

    /// Finds every country using the given ISO 4217 currency, in alpha-2 order.
    ///
    /// Unlike [`Query::find_countries`], no match is an error.
    pub fn find_countries_by_currency(&self, currency: &str) -> QueryResult<Vec<&Country>> {
        if currency.chars().count() != 3 {
            return Err(QueryError::invalid_format(LookupField::Currency, currency));
        }

        let holders = self
            .currency_to_alpha2
            .get(&fold_upper(currency))
            .ok_or_else(|| QueryError::not_found(LookupField::Currency, currency))?;

        Ok(holders
            .iter()
            .filter_map(|code| self.countries.get(code))
            .collect())
    }

    /// The whole primary store.
    pub fn find_all_countries(&self) -> &BTreeMap<String, Country> {
        &self.countries
    }

    /// Finds the first country, in alpha-2 order, that has a subdivision with
    /// this primary name (case-insensitive).
    pub fn find_subdivision_country_by_name(&self, name: &str) -> QueryResult<&Country> {
        let key = fold_lower(name);
        self.countries
            .values()
            .find(|c| c.has_subdivision_key(&key))
            .ok_or_else(|| QueryError::not_found(LookupField::Subdivision, name))
    }

    /// Resolves the border codes of `country` against this engine.
    ///
    /// Codes without a matching record are skipped.
    pub fn bordering_countries(&self, country: &Country) -> Vec<&Country> {
        country
            .borders
            .iter()
            .filter_map(|code| self.countries.get(code))
            .collect()
    }

    /// Iterates the records in alpha-2 order.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            countries: self.countries.len(),
            subdivisions: self.countries.values().map(|c| c.subdivisions.len()).sum(),
            currencies: self.currency_to_alpha2.len(),
            calling_codes: self.calling_code_to_alpha2.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryName, NativeName, Subdivision};

    fn country(alpha2: &str, alpha3: &str, name: &str) -> Country {
        Country {
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            name: CountryName {
                common: name.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn fixture() -> Query {
        let mut fr = country("FR", "FRA", "France");
        fr.name.native.insert(
            "fra".into(),
            NativeName {
                common: "France".into(),
                official: "République française".into(),
            },
        );
        fr.calling_codes = vec!["33".into()];
        fr.currencies = vec!["EUR".into()];
        fr.borders = vec!["DE".into(), "CH".into()];
        fr.insert_subdivision(Subdivision {
            name: "Île-de-France".into(),
            code: "IDF".into(),
            ..Default::default()
        });

        let mut de = country("DE", "DEU", "Germany");
        de.name.native.insert(
            "deu".into(),
            NativeName {
                common: "Deutschland".into(),
                official: "Bundesrepublik Deutschland".into(),
            },
        );
        de.calling_codes = vec!["49".into()];
        de.currencies = vec!["EUR".into(), "EUR".into()];
        de.borders = vec!["FR".into()];

        let mut us = country("US", "USA", "United States");
        us.calling_codes = vec!["1".into()];
        us.currencies = vec!["USD".into()];

        let mut ca = country("CA", "CAN", "Canada");
        ca.calling_codes = vec!["1".into()];
        ca.currencies = vec!["CAD".into()];

        Query::from_countries([fr, de, us, ca])
    }

    #[test]
    fn alpha_lookup_dispatches_on_length() {
        let q = fixture();
        assert_eq!(q.find_country_by_alpha("fr").unwrap().name(), "France");
        assert_eq!(q.find_country_by_alpha("deu").unwrap().name(), "Germany");

        for bad in ["", "F", "FRAN"] {
            let err = q.find_country_by_alpha(bad).unwrap_err();
            assert!(err.is_invalid_format(), "{bad}");
            assert_eq!(err.value(), bad);
        }

        let err = q.find_country_by_alpha("zz").unwrap_err();
        assert_eq!(
            err,
            QueryError::NotFound {
                field: LookupField::Alpha,
                value: "zz".into()
            }
        );
    }

    #[test]
    fn name_lookups_ignore_case() {
        let q = fixture();
        assert_eq!(q.find_country_by_name("GERMANY").unwrap().alpha2(), "DE");
        assert_eq!(q.find_country_by_native_name("deutschland").unwrap().alpha2(), "DE");
        assert_eq!(
            q.find_country_by_native_name("Allemagne").unwrap_err().field(),
            LookupField::NativeName
        );
    }

    #[test]
    fn shared_calling_code_goes_to_first_in_alpha2_order() {
        let q = fixture();
        assert_eq!(q.find_country_by_calling_code("1").unwrap().alpha2(), "CA");
        assert_eq!(q.find_country_by_calling_code("33").unwrap().alpha2(), "FR");
        assert!(q.find_country_by_calling_code("+33").unwrap_err().is_not_found());
    }

    #[test]
    fn currency_lookup_collects_every_holder_once() {
        let q = fixture();
        let euro: Vec<_> = q
            .find_countries_by_currency("eur")
            .unwrap()
            .into_iter()
            .map(Country::alpha2)
            .collect();
        assert_eq!(euro, ["DE", "FR"]);

        assert!(q.find_countries_by_currency("EU").unwrap_err().is_invalid_format());
        assert!(q.find_countries_by_currency("GBP").unwrap_err().is_not_found());
    }

    #[test]
    fn subdivision_scan_returns_owning_country() {
        let q = fixture();
        assert_eq!(
            q.find_subdivision_country_by_name("ÎLE-DE-FRANCE").unwrap().alpha2(),
            "FR"
        );
        let err = q.find_subdivision_country_by_name("Bavaria").unwrap_err();
        assert_eq!(err.field(), LookupField::Subdivision);
        assert!(err.is_not_found());
    }

    #[test]
    fn borders_resolve_against_the_store() {
        let q = fixture();
        let fr = q.find_country_by_alpha("FR").unwrap();
        // CH is not loaded and is skipped
        let neighbours: Vec<_> = q.bordering_countries(fr).into_iter().map(Country::alpha2).collect();
        assert_eq!(neighbours, ["DE"]);
    }

    #[test]
    fn keys_are_normalized_to_uppercase() {
        let q = Query::new([("fr".to_string(), country("FR", "FRA", "France"))]);
        assert!(q.find_all_countries().contains_key("FR"));
        assert!(q.find_country_by_alpha("Fr").is_ok());
    }

    #[test]
    fn index_values_never_dangle() {
        let q = fixture();
        let singles = [
            &q.name_to_alpha2,
            &q.alpha3_to_alpha2,
            &q.native_name_to_alpha2,
            &q.calling_code_to_alpha2,
        ];
        for index in singles {
            assert!(index.values().all(|code| q.countries.contains_key(code)));
        }
        assert!(q
            .currency_to_alpha2
            .values()
            .flatten()
            .all(|code| q.countries.contains_key(code)));
    }

    #[test]
    fn stats_count_records_and_indices() {
        let stats = fixture().stats();
        assert_eq!(
            stats,
            DbStats {
                countries: 4,
                subdivisions: 1,
                currencies: 3,
                calling_codes: 3,
            }
        );
    }

    #[test]
    fn query_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Query>();
    }
}
