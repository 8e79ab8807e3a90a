// crates/countrydb-core/src/loader/convert.rs
use super::raw::{CountryRaw, SubdivisionRaw};
use crate::model::{Country, CountryName, Geo, NativeName, Subdivision};
use crate::text::fold_upper;
use std::collections::{HashMap, HashSet};

fn text(s: Option<String>) -> String {
    s.map(|v| v.trim().to_owned()).unwrap_or_default()
}

fn code(s: Option<String>) -> String {
    fold_upper(text(s).as_str())
}

fn subdivision(raw: SubdivisionRaw) -> Subdivision {
    Subdivision {
        name: raw.name.trim().to_owned(),
        code: code(raw.code),
        kind: text(raw.kind),
        names: raw.names,
        latitude: raw.latitude.unwrap_or_default(),
        longitude: raw.longitude.unwrap_or_default(),
    }
}

fn is_alpha2(code: &str) -> bool {
    code.chars().count() == 2
}

/// **Converter:** Raw -> domain records.
///
/// Normalizes codes to uppercase, strips `+` from calling codes and rewrites
/// borders to alpha-2. Records without a two-letter alpha-2 code and
/// borders naming a country absent from `raw_countries` are dropped.
pub fn from_raw(raw_countries: Vec<CountryRaw>) -> Vec<Country> {
    // Pass 1: the set of known codes, for border resolution. Records that
    // pass 2 skips must not be resolvable either.
    let mut alpha2_known: HashSet<String> = HashSet::new();
    let mut alpha3_to_alpha2: HashMap<String, String> = HashMap::new();
    for c_raw in &raw_countries {
        let alpha2 = fold_upper(c_raw.alpha2.trim());
        if !is_alpha2(&alpha2) {
            continue;
        }
        if let Some(alpha3) = c_raw.alpha3.as_deref() {
            alpha3_to_alpha2.insert(fold_upper(alpha3.trim()), alpha2.clone());
        }
        alpha2_known.insert(alpha2);
    }

    let resolve_border = |border: &str| -> Option<String> {
        let border = fold_upper(border.trim());
        match border.chars().count() {
            2 if alpha2_known.contains(&border) => Some(border),
            3 => alpha3_to_alpha2.get(&border).cloned(),
            _ => None,
        }
    };

    // Pass 2: build records.
    let mut countries = Vec::with_capacity(raw_countries.len());
    for c_raw in raw_countries {
        let alpha2 = fold_upper(c_raw.alpha2.trim());
        if !is_alpha2(&alpha2) {
            tracing::warn!(alpha2 = %c_raw.alpha2, name = %c_raw.name.common, "Skipping country without a valid alpha2 code");
            continue;
        }

        let mut borders = Vec::with_capacity(c_raw.borders.len());
        for raw_border in &c_raw.borders {
            match resolve_border(raw_border) {
                Some(b) if !borders.contains(&b) => borders.push(b),
                Some(_) => {}
                None => {
                    tracing::warn!(country = %alpha2, border = %raw_border, "Dropping unknown border code");
                }
            }
        }

        let native = c_raw
            .name
            .native
            .into_iter()
            .map(|(lang, n)| {
                (
                    lang,
                    NativeName {
                        common: n.common,
                        official: n.official,
                    },
                )
            })
            .collect();

        let (latitude, longitude) = match c_raw.latlng.as_slice() {
            [lat, lng, ..] => (*lat, *lng),
            _ => (0.0, 0.0),
        };

        let mut country = Country {
            name: CountryName {
                common: c_raw.name.common.trim().to_owned(),
                official: c_raw.name.official,
                native,
            },
            alpha3: code(c_raw.alpha3),
            ccn3: text(c_raw.ccn3),
            capital: text(c_raw.capital),
            geo: Geo {
                continent: text(c_raw.continent),
                region: text(c_raw.region),
                subregion: text(c_raw.subregion),
                latitude,
                longitude,
                area: c_raw.area.unwrap_or_default(),
            },
            international_prefix: text(c_raw.international_prefix),
            calling_codes: c_raw
                .calling_codes
                .iter()
                .map(|c| c.trim().trim_start_matches('+').to_owned())
                .filter(|c| !c.is_empty())
                .collect(),
            currencies: c_raw.currencies.iter().map(|c| fold_upper(c.trim())).collect(),
            tlds: c_raw.tld,
            languages: c_raw.languages,
            borders,
            alpha2,
            ..Default::default()
        };

        for s_raw in c_raw.subdivisions {
            country.insert_subdivision(subdivision(s_raw));
        }

        countries.push(country);
    }
    countries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::raw::NameRaw;

    fn raw(alpha2: &str, alpha3: &str, borders: &[&str]) -> CountryRaw {
        CountryRaw {
            name: NameRaw {
                common: format!("Country {alpha2}"),
                official: String::new(),
                native: Default::default(),
            },
            alpha2: alpha2.into(),
            alpha3: Some(alpha3.into()),
            ccn3: None,
            capital: None,
            continent: None,
            region: None,
            subregion: None,
            latlng: vec![],
            area: None,
            international_prefix: None,
            calling_codes: vec!["+33".into(), " ".into()],
            currencies: vec!["eur".into()],
            tld: vec![],
            languages: Default::default(),
            borders: borders.iter().map(|b| b.to_string()).collect(),
            subdivisions: vec![],
        }
    }

    #[test]
    fn borders_are_rewritten_to_alpha2() {
        let countries = from_raw(vec![
            raw("fr", "fra", &["DEU", "de", "XYZ", "ch"]),
            raw("DE", "DEU", &["FRA"]),
        ]);
        assert_eq!(countries[0].alpha2, "FR");
        assert_eq!(countries[0].alpha3, "FRA");
        // DEU and de collapse; XYZ and CH are unknown
        assert_eq!(countries[0].borders, ["DE"]);
        assert_eq!(countries[1].borders, ["FR"]);
    }

    #[test]
    fn codes_are_normalized() {
        let countries = from_raw(vec![raw("FR", "FRA", &[])]);
        assert_eq!(countries[0].calling_codes, ["33"]);
        assert_eq!(countries[0].currencies, ["EUR"]);
    }

    #[test]
    fn records_without_alpha2_are_skipped() {
        let countries = from_raw(vec![raw("", "XXX", &[]), raw("FRA", "FRA", &[])]);
        assert!(countries.is_empty());
    }

    #[test]
    fn borders_never_name_a_skipped_record() {
        let countries = from_raw(vec![
            raw("XKX", "XKX", &["DEU"]),
            raw("DE", "DEU", &["XKX", "XK"]),
        ]);
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].alpha2, "DE");
        assert!(countries[0].borders.is_empty());
    }

    #[test]
    fn border_codes_are_measured_in_characters() {
        // two characters, three bytes
        let countries = from_raw(vec![raw("FR", "FRA", &["és"]), raw("ÉS", "ESP", &[])]);
        assert_eq!(countries[0].borders, ["ÉS"]);
    }
}
