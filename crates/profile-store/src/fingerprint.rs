//! Fingerprint codec: canonical string encoding of an interest set.
//!
//! An interest list encodes to a single string by joining its tags with
//! a reserved delimiter. The encoding is the bucket key in the backing
//! store, so it must be stable and reversible: `decode(encode(tags))`
//! returns `tags` exactly, in order.

use crate::error::{Result, StoreError};
use crate::types::Fingerprint;

/// Reserved delimiter between tags inside a fingerprint.
///
/// Not permitted inside any tag; `encode` rejects tags that contain it.
pub const DELIMITER: char = '#';

/// Encode an ordered tag sequence into a fingerprint.
///
/// # Arguments
/// * `tags` - Interest tags in record order
///
/// # Returns
/// * `Ok(Fingerprint)` - The joined encoding
/// * `Err(StoreError::InvalidTag)` - If any tag contains the delimiter
pub fn encode(tags: &[String]) -> Result<Fingerprint> {
    for tag in tags {
        if tag.contains(DELIMITER) {
            return Err(StoreError::InvalidTag {
                tag: tag.clone(),
                delimiter: DELIMITER,
            });
        }
    }
    Ok(tags.join(&DELIMITER.to_string()))
}

/// Decode a fingerprint back into its ordered tag sequence.
///
/// The empty fingerprint decodes to an empty sequence, so the
/// round-trip invariant also holds for users with no interests.
pub fn decode(fingerprint: &str) -> Vec<String> {
    if fingerprint.is_empty() {
        return Vec::new();
    }
    fingerprint.split(DELIMITER).map(|s| s.to_string()).collect()
}
