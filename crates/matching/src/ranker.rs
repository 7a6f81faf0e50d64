//! Bucket ranker: order all known fingerprints by similarity to a
//! query fingerprint.
//!
//! ## Algorithm
//! 1. Decode the query fingerprint once into a tag set
//! 2. Score every stored fingerprint against it (in parallel)
//! 3. Sort by descending score, breaking ties lexicographically on the
//!    fingerprint string so the order is reproducible
//!
//! Scores are computed exactly once per fingerprint; the sort never
//! re-invokes the similarity metric. The query's own fingerprint is
//! ranked like any other (it scores 1.0 for a non-empty query);
//! excluding the requester is the caller's job.

use rayon::prelude::*;
use tracing::debug;

use profile_store::fingerprint;
use profile_store::Fingerprint;

use crate::similarity::{jaccard, tag_set};

/// One bucket with its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedBucket {
    pub fingerprint: Fingerprint,
    pub score: f64,
}

/// Rank fingerprints by descending similarity to `query`.
///
/// # Arguments
/// * `query` - Fingerprint of the requesting user's interests
/// * `fingerprints` - Every bucket key known to the store
///
/// # Returns
/// All input fingerprints, highest similarity first. Equal scores keep
/// lexicographic order, so identical inputs always produce identical
/// output.
pub fn rank(query: &str, fingerprints: Vec<Fingerprint>) -> Vec<RankedBucket> {
    let query_tags = fingerprint::decode(query);
    let query_set = tag_set(&query_tags);

    let mut ranked: Vec<RankedBucket> = fingerprints
        .into_par_iter()
        .map(|fp| {
            let tags = fingerprint::decode(&fp);
            let score = jaccard(&query_set, &tag_set(&tags));
            RankedBucket {
                fingerprint: fp,
                score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.fingerprint.cmp(&b.fingerprint))
    });

    debug!("ranked {} buckets against query {:?}", ranked.len(), query);
    ranked
}
