//! # Matching Crate
//!
//! Similarity-bucketed candidate ranking for the matchmaking engine.
//!
//! ## Components
//!
//! - **similarity**: Jaccard overlap between interest sets
//! - **ranker**: Order all known fingerprints by similarity to a query
//! - **expander**: Consume ranked buckets until a match quota is filled
//! - **filters**: Candidate filters (age range, requester exclusion)
//! - **filter_chain**: Compose filters into the stage the expander runs
//!   once per bucket
//!
//! ## Architecture
//! A request flows through the stages in order:
//! 1. The requester's interests are encoded into a query fingerprint
//! 2. `ranker::rank` scores every stored fingerprint against it
//! 3. `CandidateExpander` pulls buckets in rank order, applying the
//!    filter chain to each, until the quota is reached
//!
//! ## Example Usage
//! ```ignore
//! use matching::{ranker, CandidateExpander, FilterChain};
//! use matching::filters::{AgeRangeFilter, ExcludeUserFilter};
//!
//! let ranked = ranker::rank(&query_fp, store.list_fingerprints()?);
//!
//! let chain = FilterChain::new()
//!     .add_filter(ExcludeUserFilter::new(user_id))
//!     .add_filter(AgeRangeFilter::new(min_age, max_age));
//!
//! let expansion = CandidateExpander::new(&store, &chain).expand(&ranked, quota)?;
//! ```

pub mod similarity;
pub mod ranker;
pub mod traits;
pub mod filters;
pub mod filter_chain;
pub mod expander;

// Re-export main types
pub use expander::{CandidateExpander, Expansion};
pub use filter_chain::FilterChain;
pub use ranker::RankedBucket;
pub use traits::CandidateFilter;
