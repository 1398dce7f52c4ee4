//! Error types for kp-platform

/// Result type for kp-platform operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a platform
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No adapter is registered for the (canonicalized, de-aliased) family.
    /// Carries the raw value exactly as it was supplied.
    #[error("Unsupported platform '{platform}'")]
    PlatformUnsupported { platform: String },

    /// The host runs a release older than the adapter's floor.
    #[error("Platform version too low for {platform}: {version} (need {minimum} or later)")]
    VersionUnsupported {
        platform: String,
        version: String,
        minimum: String,
    },
}
