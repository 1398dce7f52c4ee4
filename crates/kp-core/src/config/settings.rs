//! Run settings from `kitchenplan.toml`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use super::person::DEFAULT_FALLBACK_PERSON;
use crate::{Error, Result};

/// Settings file name, looked up in the config directory
pub const SETTINGS_FILE: &str = "kitchenplan.toml";

/// Optional per-checkout settings. Every field has a default, so the file
/// may be absent or partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Person used when the invoking user has no document
    pub fallback_person: String,

    /// Timeout for each resolver presence probe, in seconds
    pub probe_timeout_secs: u64,

    /// Resolver names to try first
    pub resolvers: Vec<String>,

    /// Chef `--log_level`
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fallback_person: DEFAULT_FALLBACK_PERSON.to_string(),
            probe_timeout_secs: 10,
            resolvers: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load `<config_dir>/kitchenplan.toml`, or defaults when absent.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(SETTINGS_FILE);
        if !path.is_file() {
            tracing::debug!(?path, "No settings file, using defaults");
            return Ok(Self::default());
        }

        tracing::debug!(?path, "Loading settings");
        let content = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        Self::parse(&content, &path)
    }

    /// Parse settings TOML. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(origin, e))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}
