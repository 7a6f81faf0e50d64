//! Core trait for candidate filtering.
//!
//! The expander applies a chain of these to every bucket it consumes,
//! so filtering policy stays pluggable without the expander knowing
//! what any individual filter checks.

use profile_store::{ProfileStore, Result, UserId};

/// A single filtering stage over candidate user ids.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent requests
/// - Filters take ownership of the `Vec<UserId>` and return the survivors,
///   preserving input order
/// - A filter may absorb per-candidate lookup failures (drop the
///   candidate) but must propagate store-level failures
pub trait CandidateFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a batch of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidate user ids (takes ownership)
    /// * `store` - Store handle for record lookups
    fn apply(&self, candidates: Vec<UserId>, store: &dyn ProfileStore) -> Result<Vec<UserId>>;
}
