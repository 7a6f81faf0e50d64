//! Candidate expander: walk ranked buckets until the quota is filled.
//!
//! ## Algorithm
//! 1. Keep a cursor into the ranked fingerprint sequence
//! 2. Fetch the bucket at the cursor, run the filter chain over its
//!    members, append the survivors
//! 3. Stop once the accumulator reaches quota or the sequence is
//!    exhausted, then truncate to quota
//!
//! Buckets are consumed in strict rank order, each at most once, and no
//! bucket beyond the one that filled the quota is ever fetched. Falling
//! short of quota is a partial result, not an error.

use tracing::{debug, warn};

use profile_store::{ProfileStore, Result, StoreError, UserId};

use crate::filter_chain::FilterChain;
use crate::ranker::RankedBucket;

/// Result of one expansion pass.
#[derive(Debug, Clone)]
pub struct Expansion {
    /// Accumulated matches, best bucket first, truncated to quota
    pub matches: Vec<UserId>,
    /// How many ranked buckets were consumed to get there
    pub buckets_fetched: usize,
}

/// Walks a ranked bucket sequence, filtering each bucket's members.
pub struct CandidateExpander<'a> {
    store: &'a dyn ProfileStore,
    filters: &'a FilterChain,
}

impl<'a> CandidateExpander<'a> {
    pub fn new(store: &'a dyn ProfileStore, filters: &'a FilterChain) -> Self {
        Self { store, filters }
    }

    /// Expand through `ranked` until `quota` matches are accumulated.
    ///
    /// # Arguments
    /// * `ranked` - Buckets in descending similarity order
    /// * `quota` - Maximum number of matches to return
    ///
    /// # Returns
    /// * `Ok(Expansion)` - Matches (possibly fewer than quota) and the
    ///   number of buckets consumed
    /// * `Err` - If the store fails in a non-absorbable way
    pub fn expand(&self, ranked: &[RankedBucket], quota: usize) -> Result<Expansion> {
        let mut matches: Vec<UserId> = Vec::new();
        let mut cursor = 0;

        while matches.len() < quota && cursor < ranked.len() {
            let bucket = &ranked[cursor];
            cursor += 1;

            let members = match self.store.get_bucket(&bucket.fingerprint) {
                Ok(members) => members,
                Err(StoreError::BucketNotFound { fingerprint }) => {
                    // Enumerated earlier in the request but gone now;
                    // treat like any other unresolvable candidate batch
                    warn!("skipping vanished bucket {:?}", fingerprint);
                    continue;
                }
                Err(other) => return Err(other),
            };

            debug!(
                "bucket {:?} (score {:.3}): {} members",
                bucket.fingerprint,
                bucket.score,
                members.len()
            );

            let survivors = self.filters.apply(members, self.store)?;
            matches.extend(survivors);
        }

        matches.truncate(quota);
        Ok(Expansion {
            matches,
            buckets_fetched: cursor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::AgeRangeFilter;
    use crate::ranker;
    use profile_store::{MemoryStore, UserRecord};

    fn store_with(users: &[(&str, u8, &[&str])]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (id, age, interests) in users {
            store
                .insert_user(UserRecord {
                    id: id.to_string(),
                    age: *age,
                    interests: interests.iter().map(|s| s.to_string()).collect(),
                })
                .unwrap();
        }
        store
    }

    fn ranked(store: &MemoryStore, query: &str) -> Vec<RankedBucket> {
        ranker::rank(query, store.list_fingerprints().unwrap())
    }

    #[test]
    fn test_stops_at_quota_without_touching_lower_buckets() {
        let store = store_with(&[
            ("u1", 25, &["a", "b"]),
            ("u2", 26, &["a", "b"]),
            ("u3", 27, &["a", "c"]),
        ]);
        let chain = FilterChain::new();
        let expander = CandidateExpander::new(&store, &chain);

        let expansion = expander.expand(&ranked(&store, "a#b"), 1).unwrap();

        assert_eq!(expansion.matches, vec!["u1".to_string()]);
        // Only the top bucket was fetched; "a#c" was never touched
        assert_eq!(expansion.buckets_fetched, 1);
    }

    #[test]
    fn test_advances_past_fully_filtered_bucket() {
        // Top bucket's only member fails the age filter
        let store = store_with(&[
            ("young", 17, &["a", "b"]),
            ("adult", 30, &["a", "c"]),
        ]);
        let chain = FilterChain::new().add_filter(AgeRangeFilter::new(21, 40));
        let expander = CandidateExpander::new(&store, &chain);

        let expansion = expander.expand(&ranked(&store, "a#b"), 1).unwrap();

        assert_eq!(expansion.matches, vec!["adult".to_string()]);
        assert_eq!(expansion.buckets_fetched, 2);
    }

    #[test]
    fn test_exhaustion_yields_partial_result() {
        let store = store_with(&[("u1", 25, &["a"]), ("u2", 25, &["b"])]);
        let chain = FilterChain::new();
        let expander = CandidateExpander::new(&store, &chain);

        let expansion = expander.expand(&ranked(&store, "a"), 10).unwrap();

        assert_eq!(expansion.matches.len(), 2);
        assert_eq!(expansion.buckets_fetched, 2);
    }

    #[test]
    fn test_truncates_overfull_final_bucket() {
        let store = store_with(&[
            ("u1", 25, &["a", "b"]),
            ("u2", 26, &["a", "b"]),
            ("u3", 27, &["a", "b"]),
        ]);
        let chain = FilterChain::new();
        let expander = CandidateExpander::new(&store, &chain);

        let expansion = expander.expand(&ranked(&store, "a#b"), 2).unwrap();

        assert_eq!(expansion.matches.len(), 2);
        assert_eq!(expansion.buckets_fetched, 1);
    }

    #[test]
    fn test_vanished_bucket_is_skipped() {
        let store = store_with(&[("u1", 25, &["a"])]);
        let chain = FilterChain::new();
        let expander = CandidateExpander::new(&store, &chain);

        // A ranked entry whose bucket the store no longer has
        let ranked = vec![
            RankedBucket {
                fingerprint: "gone".to_string(),
                score: 0.9,
            },
            RankedBucket {
                fingerprint: "a".to_string(),
                score: 0.5,
            },
        ];

        let expansion = expander.expand(&ranked, 1).unwrap();
        assert_eq!(expansion.matches, vec!["u1".to_string()]);
    }

    #[test]
    fn test_empty_ranked_sequence() {
        let store = MemoryStore::new();
        let chain = FilterChain::new();
        let expander = CandidateExpander::new(&store, &chain);

        let expansion = expander.expand(&[], 5).unwrap();
        assert!(expansion.matches.is_empty());
        assert_eq!(expansion.buckets_fetched, 0);
    }
}
