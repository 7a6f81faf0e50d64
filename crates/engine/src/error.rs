//! Error types for the recommendation engine boundary.
//!
//! Every failure carries a specific kind so the caller (an HTTP layer,
//! the CLI) can map it to a status without parsing message strings.

use profile_store::StoreError;
use thiserror::Error;

/// Errors surfaced by `MatchEngine::recommend`.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The requesting user does not exist
    #[error("user {id:?} not found")]
    UserNotFound { id: String },

    /// Request parameters failed validation
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    /// The rank+expand task died before producing a result
    #[error("ranking task panicked")]
    RankingPanicked,

    /// Store failure that aborted the request
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// HTTP-style status code for the external boundary.
    ///
    /// Unknown user maps to not-found, validation to bad-request, an
    /// unreachable store to service-unavailable; everything else
    /// (including corrupt stored records) is an internal fault.
    pub fn status_code(&self) -> u16 {
        match self {
            EngineError::UserNotFound { .. } => 404,
            EngineError::InvalidRequest { .. } => 400,
            EngineError::Store(StoreError::Unavailable { .. })
            | EngineError::Store(StoreError::Io(_)) => 503,
            EngineError::RankingPanicked | EngineError::Store(_) => 500,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
