//! Engine crate for the interest-fingerprint matchmaking service.
//!
//! This crate contains the orchestrator that coordinates ranking,
//! expansion, and filtering for one recommendation request, behind the
//! single operation an external HTTP layer calls.

pub mod engine;
pub mod error;

pub use engine::{MatchEngine, Recommendation};
pub use error::EngineError;
