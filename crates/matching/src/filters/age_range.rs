//! Filter candidates by stored age.
//!
//! Keeps exactly the candidates whose age lies inside the requested
//! inclusive range. A candidate whose user record is missing is dropped
//! and logged, never fatal: one dangling id in a bucket must not fail
//! the whole request.

use tracing::warn;

use profile_store::{ProfileStore, Result, StoreError, UserId};

use crate::traits::CandidateFilter;

/// Keeps candidates with `min_age <= age <= max_age`, preserving order.
pub struct AgeRangeFilter {
    min_age: u8,
    max_age: u8,
}

impl AgeRangeFilter {
    /// Create a new AgeRangeFilter for an inclusive age range.
    pub fn new(min_age: u8, max_age: u8) -> Self {
        Self { min_age, max_age }
    }
}

impl CandidateFilter for AgeRangeFilter {
    fn name(&self) -> &str {
        "AgeRangeFilter"
    }

    fn apply(&self, candidates: Vec<UserId>, store: &dyn ProfileStore) -> Result<Vec<UserId>> {
        let mut kept = Vec::with_capacity(candidates.len());

        for id in candidates {
            match store.get_user(&id) {
                Ok(record) => {
                    if record.age >= self.min_age && record.age <= self.max_age {
                        kept.push(id);
                    }
                }
                Err(StoreError::UserNotFound { .. }) => {
                    warn!("dropping candidate {:?}: no user record", id);
                }
                Err(other) => return Err(other),
            }
        }

        Ok(kept)
    }
}
