// crates/countrydb-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This module is skipped if the 'json' feature is missing.
// ---------------------------------------------------------------------------

use super::convert;
use super::raw::CountriesRaw;
use crate::error::Result;
use crate::model::Country;
use std::io::Read;

/// Parses a source JSON array and converts it to domain records.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Country>> {
    let raw: CountriesRaw = serde_json::from_reader(reader)?;
    tracing::debug!(records = raw.len(), "Parsed source JSON");
    Ok(convert::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeoError;

    #[test]
    fn parses_minimal_record() {
        let src = r#"[{ "name": { "common": "Monaco" }, "alpha2": "mc", "borders": ["FRA"] }]"#;
        let countries = load_from_reader(src.as_bytes()).unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].alpha2, "MC");
        // FRA is not part of this dataset
        assert!(countries[0].borders.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = load_from_reader(&b"{ not json"[..]).unwrap_err();
        assert!(matches!(err, GeoError::Json(_)));
    }
}
