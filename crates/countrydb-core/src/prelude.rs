//! countrydb prelude: bring common types and traits into scope for demos.

pub use crate::common::DbStats;
pub use crate::error::{GeoError, LookupField, QueryError, Result};
pub use crate::loader::CompressionMode;
pub use crate::model::{Country, CountryName, Geo, NativeName, Subdivision};
pub use crate::query::{Query, QueryResult};
pub use crate::text::{equals_folded, fold_lower, fold_upper};
pub use crate::traits::{Coordinates, NameMatch};
