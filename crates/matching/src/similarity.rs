//! Set-overlap similarity between interest sets.
//!
//! Jaccard index: |A ∩ B| / |A ∪ B|, always in [0, 1]. The degenerate
//! empty/empty case has an undefined union, so it is pinned to 0.0
//! instead of dividing by zero: two users who have expressed no
//! interests share nothing measurable.

use std::collections::HashSet;

/// Borrow a tag list as a set, collapsing duplicates.
pub fn tag_set(tags: &[String]) -> HashSet<&str> {
    tags.iter().map(|s| s.as_str()).collect()
}

/// Jaccard similarity between two tag sets.
///
/// Symmetric, and 1.0 for identical non-empty sets. Returns the 0.0
/// sentinel when both sets are empty.
pub fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
