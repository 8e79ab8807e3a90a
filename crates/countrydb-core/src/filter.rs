// crates/countrydb-core/src/filter.rs

//! Structural filtering: match countries against a partially filled
//! [`Country`] used as a template.
//!
//! Each non-empty template field is an equality predicate. Fields left at
//! their default impose no constraint, so `Country::default()` matches
//! everything.

use crate::model::Country;
use crate::query::Query;
use crate::text::equals_folded;

/// `true` when `template` is empty or equal to `value`, ignoring case.
#[inline]
fn folded_or_unset(template: &str, value: &str) -> bool {
    template.is_empty() || equals_folded(template, value)
}

/// `true` when `template` is empty or exactly equal to `value`.
#[inline]
fn exact_or_unset(template: &str, value: &str) -> bool {
    template.is_empty() || template == value
}

/// Checks a single candidate against every populated field of `template`.
///
/// Predicates run in a fixed order and stop at the first mismatch:
/// common name, alpha-2, alpha-3, continent, region, subregion,
/// international prefix, borders. Names, geography and the dialling prefix
/// compare case-insensitively; codes and border entries are exact.
///
/// Borders are a subset check: every template border must be among the
/// candidate's borders. An empty template border list is skipped, it does
/// not mean "has no borders". Template borders are not resolved against the
/// store first, so a code naming an absent country matches nothing rather
/// than being ignored.
pub fn matches(template: &Country, candidate: &Country) -> bool {
    folded_or_unset(&template.name.common, &candidate.name.common)
        && exact_or_unset(&template.alpha2, &candidate.alpha2)
        && exact_or_unset(&template.alpha3, &candidate.alpha3)
        && folded_or_unset(&template.geo.continent, &candidate.geo.continent)
        && folded_or_unset(&template.geo.region, &candidate.geo.region)
        && folded_or_unset(&template.geo.subregion, &candidate.geo.subregion)
        && folded_or_unset(&template.international_prefix, &candidate.international_prefix)
        && template
            .borders
            .iter()
            .all(|border| candidate.borders.contains(border))
}

impl Query {
    /// Returns every country matching all populated fields of `template`,
    /// in alpha-2 order.
    ///
    /// No match yields an empty `Vec`, never an error.
    ///
    /// ```rust
    /// use countrydb_core::model::{Country, Geo};
    /// use countrydb_core::Query;
    ///
    /// let q = Query::from_countries([
    ///     Country { alpha2: "FR".into(), geo: Geo { continent: "Europe".into(), ..Default::default() }, ..Default::default() },
    ///     Country { alpha2: "JP".into(), geo: Geo { continent: "Asia".into(), ..Default::default() }, ..Default::default() },
    /// ]);
    ///
    /// let template = Country {
    ///     geo: Geo { continent: "europe".into(), ..Default::default() },
    ///     ..Default::default()
    /// };
    /// let hits = q.find_countries(&template);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].alpha2(), "FR");
    /// ```
    pub fn find_countries(&self, template: &Country) -> Vec<&Country> {
        self.countries()
            .filter(|candidate| matches(template, candidate))
            .collect()
    }
}
