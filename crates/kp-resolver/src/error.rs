//! Error types for kp-resolver

use std::time::Duration;

/// Result type for kp-resolver operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the resolver layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A step needed a resolver but none was present at selection time
    #[error("No cookbook resolver is available (tried: {tried})")]
    NoResolverSelected { tried: String },
}

/// A presence probe could not reach a yes/no answer.
///
/// Never propagated out of selection: the registry logs it and treats the
/// candidate as absent.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed waiting for '{program}': {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },

    #[error("'{program}' did not finish within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    /// Backend-specific failure
    #[error("Probe failed: {message}")]
    Failed { message: String },
}
