//! Error types for slice sources

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching slices
#[derive(Debug, Error)]
pub enum SourceError {
    /// Catalog file does not exist
    #[error("Chart catalog not found at '{path}'")]
    NotFound { path: PathBuf },

    /// Catalog file could not be read
    #[error("Failed to read chart catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML catalog could not be parsed
    #[error("Invalid YAML in chart catalog '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON catalog could not be parsed
    #[error("Invalid JSON in chart catalog '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Catalog file extension is not .yaml, .yml or .json
    #[error("Unsupported chart catalog format '{path}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },
}
