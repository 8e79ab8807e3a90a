//! countrydb-rs: umbrella crate re-exporting [`countrydb_core`] for the demos.

pub use countrydb_core::*;
