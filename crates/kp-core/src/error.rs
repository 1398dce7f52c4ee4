//! Error types for kp-core

use std::path::PathBuf;

/// Result type for kp-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading and resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither the requested person nor the fallback person has a document
    #[error("No person configuration found for '{identity}' or fallback '{fallback}'")]
    ConfigMissing { identity: String, fallback: String },

    /// A document or settings file exists but could not be parsed
    #[error("Failed to parse {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// A document or settings file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn parse(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::ConfigParse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
