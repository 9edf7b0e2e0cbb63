//! gencache - Generated Project Cache
//!
//! Persists fingerprints of previous builds and deployments per profile so
//! development tooling can skip redundant work across runs.

pub mod cli;
pub mod error;
pub mod fingerprint;
pub mod generated;
pub mod ui;

pub use error::{GencacheError, GencacheResult};
