//! Error types for the profile-store crate.
//!
//! One enum covers the whole store boundary: fingerprint encoding,
//! dataset loading, and record/bucket lookups. Callers match on the
//! variant to decide whether a failure is absorbable (a single missing
//! record) or fatal (the store itself is gone).

use thiserror::Error;

/// Errors produced by the fingerprint codec, the dataset loader, and
/// `ProfileStore` implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A tag contained the reserved fingerprint delimiter
    #[error("invalid tag {tag:?}: contains reserved delimiter '{delimiter}'")]
    InvalidTag { tag: String, delimiter: char },

    /// No user record exists for the given id
    #[error("user {id:?} not found")]
    UserNotFound { id: String },

    /// No bucket exists for the given fingerprint
    #[error("bucket {fingerprint:?} not found")]
    BucketNotFound { fingerprint: String },

    /// Two records in one dataset claimed the same user id
    #[error("duplicate user id {id:?} in dataset")]
    DuplicateUser { id: String },

    /// I/O error while reading a dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file was not valid JSON for the expected record shape
    #[error("malformed dataset {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backing store could not be reached at all
    ///
    /// Never produced by `MemoryStore`; kept for remote implementations
    /// so the engine can map it to a service-unavailable response.
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
