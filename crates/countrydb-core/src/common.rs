use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the engine.
///
/// Returned by [`crate::Query::stats`], these counts reflect the records and
/// index sizes after any filtering applied at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    pub subdivisions: usize,
    pub currencies: usize,
    pub calling_codes: usize,
}
