//! The store boundary: a read-only view of user records and
//! fingerprint buckets.
//!
//! The matching core never talks to a database directly. It receives a
//! `ProfileStore` handle constructed at the edge of the program, so the
//! production implementation (a remote document store) and the
//! in-memory implementation used by tests, benchmarks, and the CLI are
//! interchangeable.

use std::collections::{BTreeMap, HashMap};

use crate::error::{Result, StoreError};
use crate::fingerprint;
use crate::types::{Fingerprint, UserId, UserRecord};

/// Read-only access to user records and fingerprint buckets.
///
/// ## Design Note
/// - `Send + Sync` so one handle can serve concurrent requests
/// - Methods return owned values: a remote implementation has nothing
///   to borrow from
/// - Mutation is deliberately absent; bucket maintenance belongs to
///   whoever writes user records, not to this core
pub trait ProfileStore: Send + Sync {
    /// Enumerate every fingerprint that has a bucket.
    fn list_fingerprints(&self) -> Result<Vec<Fingerprint>>;

    /// All user ids whose interests share the given fingerprint.
    fn get_bucket(&self, fingerprint: &str) -> Result<Vec<UserId>>;

    /// Load one user record by id.
    fn get_user(&self, id: &str) -> Result<UserRecord>;
}

/// In-memory `ProfileStore` backed by hash maps.
///
/// Holds the primary user map plus the derived fingerprint→members
/// index, mirroring the `users` collection and `derived/hashes`
/// subcollections of the production store. Buckets use a `BTreeMap` so
/// enumeration order is stable across runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<UserId, UserRecord>,
    buckets: BTreeMap<Fingerprint, Vec<UserId>>,
}

impl MemoryStore {
    /// Creates a new, empty store
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            buckets: BTreeMap::new(),
        }
    }

    /// Insert a user record and index it into its fingerprint bucket.
    ///
    /// # Returns
    /// * `Err(StoreError::InvalidTag)` - If an interest contains the delimiter
    /// * `Err(StoreError::DuplicateUser)` - If the id is already present
    pub fn insert_user(&mut self, record: UserRecord) -> Result<()> {
        let fp = fingerprint::encode(&record.interests)?;

        if self.users.contains_key(&record.id) {
            return Err(StoreError::DuplicateUser {
                id: record.id.clone(),
            });
        }

        self.buckets
            .entry(fp)
            .or_insert_with(Vec::new)
            .push(record.id.clone());
        self.users.insert(record.id.clone(), record);
        Ok(())
    }

    /// All known user ids, in stable (sorted) order.
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.users.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Get counts for debugging/validation: (users, buckets)
    pub fn counts(&self) -> (usize, usize) {
        (self.users.len(), self.buckets.len())
    }
}

impl ProfileStore for MemoryStore {
    fn list_fingerprints(&self) -> Result<Vec<Fingerprint>> {
        Ok(self.buckets.keys().cloned().collect())
    }

    fn get_bucket(&self, fingerprint: &str) -> Result<Vec<UserId>> {
        self.buckets
            .get(fingerprint)
            .cloned()
            .ok_or_else(|| StoreError::BucketNotFound {
                fingerprint: fingerprint.to_string(),
            })
    }

    fn get_user(&self, id: &str) -> Result<UserRecord> {
        self.users
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound { id: id.to_string() })
    }
}
