//! Error types for system symbol loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading symbol definition files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The contents are not a JSON array of definitions.
    #[error("invalid symbol definitions: {0}")]
    Json(#[from] serde_json::Error),

    /// A definition names a kind that does not exist.
    #[error("symbol '{name}' has unknown kind '{kind}'")]
    UnknownKind { name: String, kind: String },

    /// A definition has an empty or blank name.
    #[error("symbol definition #{position} has no name")]
    EmptyName { position: usize },
}

impl LoadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
