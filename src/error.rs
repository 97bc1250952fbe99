//! Error types for Deodar
//!
//! Uses `thiserror` for library errors. Command boundaries in the binary wrap
//! these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Deodar operations
pub type DeodarResult<T> = Result<T, DeodarError>;

/// Main error type for Deodar operations
#[derive(Error, Debug)]
pub enum DeodarError {
    /// The working directory is neither a plugin nor a theme root
    #[error("not a project root: {path} (expected {expected})")]
    NotAProject { path: PathBuf, expected: String },

    /// A block with the same slug already exists
    #[error("block '{slug}' already exists at {path}")]
    BlockExists { slug: String, path: PathBuf },

    /// Block name produced an empty slug
    #[error("invalid block name '{name}': slug would be empty")]
    InvalidBlockName { name: String },

    /// Template could not be rendered or written
    #[error("failed to write template '{template}' to {path}: {source}")]
    Template {
        template: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Archive creation failed
    #[error("failed to create archive {path}: {message}")]
    Archive { path: PathBuf, message: String },

    /// File watcher could not be created or registered
    #[error("file watcher error: {0}")]
    Watcher(#[from] notify::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
