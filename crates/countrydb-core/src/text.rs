// crates/countrydb-core/src/text.rs

//! Case folding helpers shared by the index builder and the lookups.
//!
//! Matching in this crate is exact up to case: there is no transliteration,
//! no accent stripping and no substring matching. `"Côte d'Ivoire"` matches
//! `"CÔTE D'IVOIRE"` but not `"Cote d'Ivoire"`.

/// Convert a string into the lowercased key used by the name indices.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::fold_lower;
///
/// assert_eq!(fold_lower("France"), "france");
/// assert_eq!(fold_lower("ÅLAND"), "åland");
/// ```
#[inline]
pub fn fold_lower(s: &str) -> String {
    s.to_lowercase()
}

/// Convert a string into the uppercased key used by the code indices.
///
/// ```rust
/// use countrydb_core::text::fold_upper;
///
/// assert_eq!(fold_upper("fra"), "FRA");
/// ```
#[inline]
pub fn fold_upper(s: &str) -> String {
    s.to_uppercase()
}

/// Case-insensitive equality without allocating.
///
/// Compares the lowercase expansions of both strings character by
/// character, so it agrees with `fold_lower(a) == fold_lower(b)`.
///
/// ```rust
/// use countrydb_core::text::equals_folded;
///
/// assert!(equals_folded("Europe", "EUROPE"));
/// assert!(equals_folded("Straße", "STRAßE"));
/// assert!(!equals_folded("Europe", "Europa"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folded_equality_matches_lowercased_equality() {
        let pairs = [
            ("Western Europe", "western europe"),
            ("ÎLE-DE-FRANCE", "île-de-france"),
            ("Asia", "Africa"),
            ("", ""),
            ("a", ""),
        ];
        for (a, b) in pairs {
            assert_eq!(equals_folded(a, b), fold_lower(a) == fold_lower(b), "{a} vs {b}");
        }
    }

    #[test]
    fn folding_keeps_diacritics() {
        assert!(!equals_folded("Curaçao", "Curacao"));
    }
}
