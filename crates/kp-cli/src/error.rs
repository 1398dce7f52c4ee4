//! Error types for kp-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from kp-platform
    #[error(transparent)]
    Platform(#[from] kp_platform::Error),

    /// Error from kp-resolver
    #[error(transparent)]
    Resolver(#[from] kp_resolver::Error),

    /// Error from kp-core
    #[error(transparent)]
    Core(#[from] kp_core::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// An external command ran but did not succeed
    #[error("Command failed ({}): {command}", exit_label(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Platform(_) => 2,
            CliError::Core(kp_core::Error::ConfigMissing { .. }) => 3,
            CliError::Resolver(kp_resolver::Error::NoResolverSelected { .. }) => 4,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let unsupported: CliError = kp_platform::Error::PlatformUnsupported {
            platform: "freebsd".into(),
        }
        .into();
        assert_eq!(unsupported.exit_code(), 2);

        let too_old: CliError = kp_platform::Error::VersionUnsupported {
            platform: "mac_os_x".into(),
            version: "10.6".into(),
            minimum: "10.7".into(),
        }
        .into();
        assert_eq!(too_old.exit_code(), 2);

        let missing: CliError = kp_core::Error::ConfigMissing {
            identity: "alice".into(),
            fallback: "roderik".into(),
        }
        .into();
        assert_eq!(missing.exit_code(), 3);

        let no_resolver: CliError = kp_resolver::Error::NoResolverSelected {
            tried: "Berkshelf".into(),
        }
        .into();
        assert_eq!(no_resolver.exit_code(), 4);

        assert_eq!(CliError::user("nope").exit_code(), 1);
    }

    #[test]
    fn test_command_failed_display() {
        let err = CliError::CommandFailed {
            command: "berks vendor cookbooks -q".into(),
            code: Some(7),
        };
        assert_eq!(
            err.to_string(),
            "Command failed (exit code 7): berks vendor cookbooks -q"
        );
    }
}
