// crates/countrydb-core/src/loader/snapshot.rs

//! Binary snapshots: the converted records serialized with bincode, so a
//! dataset only goes through JSON parsing and normalization once.

use super::common_io::{self, CompressionMode};
use crate::error::Result;
use crate::model::Country;
use std::io::Read;
use std::path::Path;

pub fn read<R: Read>(reader: R) -> Result<Vec<Country>> {
    let countries: Vec<Country> = bincode::deserialize_from(reader)?;
    tracing::debug!(records = countries.len(), "Decoded snapshot");
    Ok(countries)
}

pub fn write<'a>(
    path: &Path,
    countries: impl IntoIterator<Item = &'a Country>,
    compression: CompressionMode,
) -> Result<()> {
    let countries: Vec<&Country> = countries.into_iter().collect();
    common_io::write_stream(path, compression, |w| {
        bincode::serialize_into(w, &countries)?;
        Ok(())
    })
}
