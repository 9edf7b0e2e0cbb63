//! Error types for gencache
//!
//! All modules use `GencacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gencache operations
pub type GencacheResult<T> = Result<T, GencacheError>;

/// All errors that can occur in gencache
#[derive(Error, Debug)]
pub enum GencacheError {
    // Cache file errors
    #[error("Malformed cache file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to encode cache: {0}")]
    Encode(#[source] serde_yaml::Error),

    #[error("Failed to create cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Entry errors
    #[error("Unknown {kind} field: {field}")]
    UnknownField { kind: &'static str, field: String },

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Variable not set: {0}")]
    VarNotFound(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    User(String),
}

impl GencacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the error came from the filesystem
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::CacheDirCreate { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Decode { .. } => {
                Some("Fix the YAML by hand or delete the file to start from an empty cache")
            }
            Self::CacheDirCreate { .. } => Some("Check permissions on the project directory"),
            Self::UnknownField { kind: "image", .. } => Some(
                "Valid keys: imageConfigHash, dockerfileHash, contextHash, entrypointHash, customFilesHash, imageName, tag",
            ),
            Self::UnknownField { kind: "deployment", .. } => Some(
                "Valid keys: deploymentConfigHash, helmOverridesHash, helmChartHash, kubectlManifestsHash",
            ),
            Self::ProfileNotFound(_) => Some("Run: gencache profile use <name>"),
            Self::VarNotFound(_) => Some("Run: gencache var set <key> <value>"),
            _ => None,
        }
    }
}
