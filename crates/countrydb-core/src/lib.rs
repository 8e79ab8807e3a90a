// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! Read-only country reference data: exact, case-insensitive lookups by
//! name, native name, ISO code, calling code and currency, plus structural
//! filtering against a partially filled [`Country`] template.
//!
//! ```rust
//! use countrydb_core::{Country, Query};
//!
//! let q = Query::from_countries([Country {
//!     alpha2: "FR".into(),
//!     alpha3: "FRA".into(),
//!     currencies: vec!["EUR".into()],
//!     ..Default::default()
//! }]);
//!
//! assert_eq!(q.find_country_by_alpha("fra").unwrap().alpha2(), "FR");
//! assert_eq!(q.find_countries_by_currency("EUR").unwrap().len(), 1);
//! assert!(q.find_country_by_alpha("FRAN").unwrap_err().is_invalid_format());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod filter;
pub mod loader; // The public loader
pub mod model;
pub mod prelude;
pub mod query;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{GeoError, LookupField, QueryError, Result};
pub use crate::model::{Country, CountryName, Geo, NativeName, Subdivision};
pub use crate::query::{Query, QueryResult};
pub use crate::traits::{Coordinates, NameMatch};
