//! ResolverBackend trait and probe context

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ProbeError;

/// Upper bound on how long a single presence probe may run.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Inputs shared by every presence probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeContext {
    /// Directory holding the resolver manifests (Berksfile, Cheffile)
    pub config_dir: PathBuf,
    /// Whether the run was started with debug output
    pub debug: bool,
    /// Per-probe timeout for external helpers
    pub timeout: Duration,
}

impl ProbeContext {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            debug: false,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Path of a manifest file inside the config directory.
    pub fn manifest(&self, file_name: &str) -> PathBuf {
        self.config_dir.join(file_name)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

/// A pluggable cookbook dependency resolver.
///
/// Implementations are registered explicitly with
/// [`crate::ResolverRegistry::register`]; nothing is discovered at runtime.
pub trait ResolverBackend: Send + Sync {
    /// Display name, also used for preference ordering
    fn name(&self) -> &str;

    /// Is this backend usable in the given environment?
    ///
    /// May touch the filesystem and run external helpers.
    fn probe(&self, context: &ProbeContext) -> Result<bool, ProbeError>;

    /// Command that downloads cookbooks into `cookbooks/`.
    fn fetch_command(&self, verbose: bool) -> String;

    /// Command that refreshes already-downloaded cookbooks.
    fn update_command(&self, verbose: bool) -> String;
}
