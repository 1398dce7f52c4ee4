//! Berkshelf backend

use crate::backend::{ProbeContext, ResolverBackend};
use crate::error::ProbeError;
use crate::probe::probe_command;

/// Resolves cookbooks with `berks`, driven by a `Berksfile`.
#[derive(Debug, Clone)]
pub struct Berkshelf {
    helper: String,
}

impl Berkshelf {
    pub const NAME: &'static str = "Berkshelf";
    pub const MANIFEST: &'static str = "Berksfile";

    pub fn new() -> Self {
        Self {
            helper: "berks".to_string(),
        }
    }

    /// Probe with a different helper program than `berks`.
    pub fn with_helper(mut self, program: impl Into<String>) -> Self {
        self.helper = program.into();
        self
    }

    fn vendor_command(verbose: bool) -> String {
        let flag = if verbose { "-d" } else { "-q" };
        format!("berks vendor cookbooks {flag}")
    }
}

impl Default for Berkshelf {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverBackend for Berkshelf {
    fn name(&self) -> &str {
        Self::NAME
    }

    /// Present when a `Berksfile` exists and the helper exits successfully.
    fn probe(&self, context: &ProbeContext) -> Result<bool, ProbeError> {
        if !context.manifest(Self::MANIFEST).is_file() {
            tracing::debug!(dir = %context.config_dir.display(), "No Berksfile");
            return Ok(false);
        }

        let status = probe_command(&self.helper, &[], &context.config_dir, context.timeout)?;
        Ok(status.success())
    }

    fn fetch_command(&self, verbose: bool) -> String {
        Self::vendor_command(verbose)
    }

    fn update_command(&self, verbose: bool) -> String {
        Self::vendor_command(verbose)
    }
}
