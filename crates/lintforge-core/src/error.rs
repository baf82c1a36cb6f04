//! Error types for config generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating configs
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to read {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object", .path.display())]
    ManifestShape { path: PathBuf },

    #[error("Failed to write {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to update package.json at '{path}': '{segment}' is not an object")]
    ManifestUpdate { path: String, segment: String },

    #[error("Unsupported linter: {0}")]
    UnsupportedTool(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render {file}: {source}")]
    Render {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load preset {}: {reason}", .path.display())]
    Preset { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
