// crates/countrydb-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// How a dataset or snapshot file is wrapped on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// A trailing `.gz` selects gzip.
    pub fn for_path(path: &Path) -> Self {
        if path.extension().is_some_and(|ext| ext == "gz") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    match CompressionMode::for_path(path) {
        CompressionMode::None => Ok(Box::new(reader)),
        CompressionMode::Gzip => {
            tracing::debug!(path = %path.display(), "Opening gzip compressed stream");
            #[cfg(feature = "compact")]
            {
                Ok(Box::new(GzDecoder::new(reader)))
            }
            #[cfg(not(feature = "compact"))]
            {
                Err(GeoError::InvalidData(format!(
                    "{} is gzip compressed but the 'compact' feature is disabled",
                    path.display()
                )))
            }
        }
    }
}

/// Creates `path` and hands a writer to `write`, finishing the gzip stream
/// afterwards when `compression` asks for it.
pub fn write_stream<F>(path: &Path, compression: CompressionMode, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::None => {
            write(&mut writer)?;
        }
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(&mut writer, Compression::default());
                write(&mut encoder)?;
                encoder.finish()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                let _ = write;
                return Err(GeoError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compression_follows_extension() {
        assert_eq!(CompressionMode::for_path(Path::new("a/countries.json.gz")), CompressionMode::Gzip);
        assert_eq!(CompressionMode::for_path(Path::new("a/countries.json")), CompressionMode::None);
        assert_eq!(CompressionMode::for_path(Path::new("gz")), CompressionMode::None);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/nonexistent/countries.json")).err();
        assert!(matches!(err, Some(GeoError::NotFound(_))));
    }
}
