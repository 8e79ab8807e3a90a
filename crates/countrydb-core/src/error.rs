// crates/countrydb-core/src/error.rs
use std::fmt;
use thiserror::Error;

/// The index a failed lookup was resolved against.
///
/// Carried by every [`QueryError`] so callers can branch on which field
/// failed to match without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupField {
    Name,
    NativeName,
    Alpha,
    CallingCode,
    Currency,
    Subdivision,
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LookupField::Name => "name",
            LookupField::NativeName => "native name",
            LookupField::Alpha => "code",
            LookupField::CallingCode => "calling code",
            LookupField::Currency => "currency",
            LookupField::Subdivision => "subdivision name",
        };
        f.write_str(label)
    }
}

/// Failure of a keyed lookup on [`crate::Query`].
///
/// `value` is always the caller's original input, before any case folding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("could not find country with {field} `{value}`")]
    NotFound { field: LookupField, value: String },
    #[error("invalid {field} format `{value}`")]
    InvalidFormat { field: LookupField, value: String },
}

impl QueryError {
    pub(crate) fn not_found(field: LookupField, value: &str) -> Self {
        QueryError::NotFound {
            field,
            value: value.to_owned(),
        }
    }

    pub(crate) fn invalid_format(field: LookupField, value: &str) -> Self {
        QueryError::InvalidFormat {
            field,
            value: value.to_owned(),
        }
    }

    /// The lookup field that failed.
    pub fn field(&self) -> LookupField {
        match self {
            QueryError::NotFound { field, .. } | QueryError::InvalidFormat { field, .. } => *field,
        }
    }

    /// The offending input as passed by the caller.
    pub fn value(&self) -> &str {
        match self {
            QueryError::NotFound { value, .. } | QueryError::InvalidFormat { value, .. } => value,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::NotFound { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, QueryError::InvalidFormat { .. })
    }
}

/// Errors raised while loading or persisting a dataset.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Convenience alias used by the loader.
pub type Result<T> = std::result::Result<T, GeoError>;
