//! # Match Engine
//!
//! This module coordinates one recommendation request end to end:
//! 1. Validate the request parameters
//! 2. Load the requesting user's record
//! 3. Encode their interests into a query fingerprint
//! 4. Rank every stored fingerprint by similarity (CPU-bound, off the
//!    async runtime)
//! 5. Expand through ranked buckets under the age filter until the
//!    quota is met
//!
//! The store handle is injected at construction; the engine holds no
//! other state, so one instance serves any number of concurrent
//! requests.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, instrument};

use matching::filters::{AgeRangeFilter, ExcludeUserFilter};
use matching::{ranker, CandidateExpander, FilterChain};
use profile_store::{fingerprint, ProfileStore, StoreError, UserId};

use crate::error::{EngineError, Result};

/// Response for one recommendation request.
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// Matched user ids, best bucket first, at most `quota` long
    pub matches: Vec<UserId>,
    /// Wall-clock duration of the ranking+expansion phase (informational)
    pub elapsed_seconds: f64,
    /// How many ranked buckets were consumed (informational)
    pub buckets_scanned: usize,
}

/// Stateless orchestrator over an injected store handle.
#[derive(Clone)]
pub struct MatchEngine {
    store: Arc<dyn ProfileStore>,
}

impl MatchEngine {
    /// Create an engine over the given store handle.
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Main entry point: recommend up to `quota` users for `user_id`,
    /// restricted to ages in `[min_age, max_age]`.
    ///
    /// The requesting user is never part of the result.
    ///
    /// # Returns
    /// * `Ok(Recommendation)` - Possibly fewer than `quota` matches if
    ///   the candidate pool ran out (a partial result, not an error)
    /// * `Err(EngineError)` - With a kind specific enough for the
    ///   caller to map to a status
    #[instrument(skip(self), fields(user_id = %user_id, quota = quota))]
    pub async fn recommend(
        &self,
        user_id: &str,
        quota: usize,
        min_age: u8,
        max_age: u8,
    ) -> Result<Recommendation> {
        if quota == 0 {
            return Err(EngineError::InvalidRequest {
                reason: "quota must be at least 1".to_string(),
            });
        }
        if min_age > max_age {
            return Err(EngineError::InvalidRequest {
                reason: format!("min_age {} exceeds max_age {}", min_age, max_age),
            });
        }

        // Load the requester; their interests define the query
        let record = self.store.get_user(user_id).map_err(|err| match err {
            StoreError::UserNotFound { id } => EngineError::UserNotFound { id },
            other => EngineError::Store(other),
        })?;
        let query_fp = fingerprint::encode(&record.interests)?;
        info!(
            "query fingerprint {:?} ({} interests)",
            query_fp,
            record.interests.len()
        );

        // Rank + expand is pure CPU and store reads; run it off the
        // async runtime and time exactly this phase
        let store = Arc::clone(&self.store);
        let requester: UserId = user_id.to_string();
        let (expansion, elapsed) = tokio::task::spawn_blocking(move || {
            let start = Instant::now();

            let fingerprints = store.list_fingerprints()?;
            let ranked = ranker::rank(&query_fp, fingerprints);

            let chain = FilterChain::new()
                .add_filter(ExcludeUserFilter::new(requester))
                .add_filter(AgeRangeFilter::new(min_age, max_age));
            let expansion = CandidateExpander::new(store.as_ref(), &chain).expand(&ranked, quota)?;

            Ok::<_, StoreError>((expansion, start.elapsed()))
        })
        .await
        .map_err(|_| EngineError::RankingPanicked)??;

        info!(
            "matched {}/{} requested users across {} buckets in {:.2?}",
            expansion.matches.len(),
            quota,
            expansion.buckets_fetched,
            elapsed
        );

        Ok(Recommendation {
            matches: expansion.matches,
            elapsed_seconds: elapsed.as_secs_f64(),
            buckets_scanned: expansion.buckets_fetched,
        })
    }
}
