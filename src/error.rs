use std::path::PathBuf;
use thiserror::Error;

/// Hard failures from the snippet store.
///
/// "Not found" and "duplicate" are ordinary return values on the store
/// operations, not errors; the only thing that propagates as an `Err` is
/// the storage layer itself becoming unusable. Callers surface these to
/// the user rather than retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot open snippet database at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("snippet database query failed: {0}")]
    Query(#[from] rusqlite::Error),
}
