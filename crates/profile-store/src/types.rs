//! Core domain types shared across the workspace.
//!
//! User ids are strings because the upstream store is a document
//! database whose document ids are opaque strings, not integers.

use serde::{Deserialize, Serialize};

/// Unique identifier for a user (document id in the backing store)
pub type UserId = String;

/// Canonical string encoding of an interest set.
///
/// Doubles as the bucket identifier in the backing store: all users
/// whose interests encode to the same fingerprint share one bucket.
pub type Fingerprint = String;

/// A user profile as stored by the backing store.
///
/// Read-only to the matching core; `interests` keeps the order the
/// record was written with, since the fingerprint encoding is
/// order-preserving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub age: u8,
    pub interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_json_round_trip() {
        let record = UserRecord {
            id: "u1".to_string(),
            age: 24,
            interests: vec!["hiking".to_string(), "jazz".to_string()],
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_user_record_from_document_json() {
        // Shape of a document as exported from the backing store
        let json = r#"{"id": "abc123", "age": 31, "interests": ["tennis"]}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, "abc123");
        assert_eq!(record.age, 31);
        assert_eq!(record.interests, vec!["tennis".to_string()]);
    }
}
