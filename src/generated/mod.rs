//! Generated project cache
//!
//! Remembers what previous runs built and deployed so unchanged images and
//! deployments can be skipped.
//!
//! # Layout
//!
//! | Key | Content |
//! |-----|---------|
//! | `activeProfile` | profile used when no override is given |
//! | `vars` | variables remembered between runs |
//! | `profiles.<name>.images` | image input fingerprints |
//! | `profiles.<name>.deployments` | deployment input fingerprints |
//! | `profiles.<name>.dependencies` | resolved dependency versions |
//! | `profiles.<name>.lastContext` | last cluster namespace and context |

pub mod schema;
pub mod store;

pub use schema::{CacheEntry, DeploymentEntry, ImageEntry, LastContext, ProfileCache, ProjectCache};
pub use store::{load_from_path, save_to_path, CacheStore};

/// Location of the cache file, relative to the project root
pub const GENERATED_CONFIG_PATH: &str = ".devspace/generated.yaml";
