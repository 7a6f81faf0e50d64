//! Filter that removes the requesting user from their own results.
//!
//! The requester's fingerprint always ranks first against itself, so
//! without this stage every response would lead with the requester's
//! own id. Running it inside the expansion loop keeps quota accounting
//! exact: the requester never occupies a result slot.

use profile_store::{ProfileStore, Result, UserId};

use crate::traits::CandidateFilter;

/// Removes a single user id from the candidate stream.
pub struct ExcludeUserFilter {
    user_id: UserId,
}

impl ExcludeUserFilter {
    /// Create a filter excluding the given user id.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl CandidateFilter for ExcludeUserFilter {
    fn name(&self) -> &str {
        "ExcludeUserFilter"
    }

    fn apply(&self, candidates: Vec<UserId>, _store: &dyn ProfileStore) -> Result<Vec<UserId>> {
        Ok(candidates
            .into_iter()
            .filter(|id| *id != self.user_id)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_store::MemoryStore;

    fn ids(raw: &[&str]) -> Vec<UserId> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_excludes_only_the_requester() {
        let store = MemoryStore::new();
        let filter = ExcludeUserFilter::new("u2");

        let out = filter.apply(ids(&["u1", "u2", "u3"]), &store).unwrap();
        assert_eq!(out, ids(&["u1", "u3"]));
    }

    #[test]
    fn test_noop_when_requester_absent() {
        let store = MemoryStore::new();
        let filter = ExcludeUserFilter::new("elsewhere");

        let out = filter.apply(ids(&["u1", "u2"]), &store).unwrap();
        assert_eq!(out, ids(&["u1", "u2"]));
    }
}
