//! # Profile Store Crate
//!
//! Domain types and store access for the matchmaking engine.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (UserId, Fingerprint, UserRecord)
//! - **fingerprint**: Encode/decode interest sets to canonical bucket keys
//! - **store**: The `ProfileStore` trait and the in-memory implementation
//! - **loader**: Build a `MemoryStore` from a JSON dataset export
//! - **error**: Error types for the store boundary
//!
//! ## Example Usage
//!
//! ```ignore
//! use profile_store::{loader, ProfileStore};
//! use std::path::Path;
//!
//! // Load a dataset export
//! let store = loader::load_from_file(Path::new("data/users.json"))?;
//!
//! // Query it through the trait the engine sees
//! let record = store.get_user("u1")?;
//! let peers = store.get_bucket("hiking#jazz")?;
//!
//! println!("{} shares a bucket with {} users", record.id, peers.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod fingerprint;
pub mod store;
pub mod loader;

// Re-export commonly used types for convenience
pub use error::{Result, StoreError};
pub use store::{MemoryStore, ProfileStore};
pub use types::{Fingerprint, UserId, UserRecord};
