//! The FilterChain composes multiple candidate filters.

use tracing::debug;

use profile_store::{ProfileStore, Result, UserId};

use crate::traits::CandidateFilter;

/// Chains candidate filters into a single stage applied per bucket.
///
/// ## Usage
/// ```ignore
/// let chain = FilterChain::new()
///     .add_filter(ExcludeUserFilter::new("u1"))
///     .add_filter(AgeRangeFilter::new(21, 35));
///
/// let survivors = chain.apply(bucket_members, &store)?;
/// ```
pub struct FilterChain {
    filters: Vec<Box<dyn CandidateFilter>>,
}

impl FilterChain {
    /// Create a new empty FilterChain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the chain (builder pattern).
    pub fn add_filter(mut self, filter: impl CandidateFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to one batch of candidates.
    ///
    /// # Returns
    /// * `Ok(Vec<UserId>)` - Candidates surviving every filter, order preserved
    /// * `Err` - If any filter hits a non-absorbable store failure
    pub fn apply(&self, candidates: Vec<UserId>, store: &dyn ProfileStore) -> Result<Vec<UserId>> {
        let mut current = candidates;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, store)?;
            debug!(
                "filter {}: {} -> {} candidates",
                filter.name(),
                before,
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}
