//! librarian-chef backend

use crate::backend::{ProbeContext, ResolverBackend};
use crate::error::ProbeError;
use crate::probe::probe_command;

/// Resolves cookbooks with `librarian-chef`, driven by a `Cheffile`.
///
/// Unlike Berkshelf, the helper only has to start; its exit status is
/// ignored.
#[derive(Debug, Clone)]
pub struct Librarian {
    helper: String,
}

impl Librarian {
    pub const NAME: &'static str = "librarian-chef";
    pub const MANIFEST: &'static str = "Cheffile";

    pub fn new() -> Self {
        Self {
            helper: "librarian-chef".to_string(),
        }
    }

    pub fn with_helper(mut self, program: impl Into<String>) -> Self {
        self.helper = program.into();
        self
    }

    fn command(action: &str, verbose: bool) -> String {
        let flag = if verbose { "--verbose" } else { "--quiet" };
        format!("bin/librarian-chef {action} --clean {flag}")
    }
}

impl Default for Librarian {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolverBackend for Librarian {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn probe(&self, context: &ProbeContext) -> Result<bool, ProbeError> {
        if !context.manifest(Self::MANIFEST).is_file() {
            tracing::debug!(dir = %context.config_dir.display(), "No Cheffile");
            return Ok(false);
        }

        probe_command(&self.helper, &[], &context.config_dir, context.timeout)?;
        Ok(true)
    }

    fn fetch_command(&self, verbose: bool) -> String {
        Self::command("install", verbose)
    }

    fn update_command(&self, verbose: bool) -> String {
        Self::command("update", verbose)
    }
}
