//! Per-invocation run context
//!
//! Everything a command needs that is decided once at startup: the config
//! directory, its settings, the platform adapter and which person to load.

use std::path::{Path, PathBuf};

use kp_core::config::{ConfigEngine, PersonQuery, ResolvedRun, Settings, YamlDirLoader};
use kp_platform::{
    PlatformAdapter, PlatformRegistry, detect_platform_family, detect_platform_version,
};
use kp_resolver::{ProbeContext, ResolverRegistry};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Inputs shared by the `show`, `generate` and `run` commands.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Absolute path of the Kitchenplan checkout
    pub config_dir: PathBuf,
    pub settings: Settings,
    pub adapter: PlatformAdapter,
    /// Release of the target platform, when known
    pub platform_version: Option<String>,
    pub person: PersonQuery,
    pub verbose: bool,
}

impl RunContext {
    /// Build the context from parsed flags.
    ///
    /// Flags override `kitchenplan.toml`, which overrides built-in defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_dir = std::path::absolute(&cli.config_dir)?;
        if !config_dir.is_dir() {
            return Err(CliError::user(format!(
                "Config directory not found: {}",
                config_dir.display()
            )));
        }

        let settings = Settings::load(&config_dir)?;

        let family = match &cli.platform {
            Some(family) => family.clone(),
            None => detect_platform_family(),
        };
        let adapter = PlatformRegistry::with_builtins().resolve(&family)?.clone();
        tracing::debug!(family = %family, platform = %adapter.id, "Resolved platform");

        // A detected host version says nothing about an overridden platform.
        let platform_version = match (&cli.platform_version, &cli.platform) {
            (Some(version), _) => Some(version.clone()),
            (None, None) => detect_platform_version(),
            (None, Some(_)) => None,
        };

        let fallback = cli
            .fallback_person
            .clone()
            .unwrap_or_else(|| settings.fallback_person.clone());
        let person = match &cli.person {
            Some(name) => PersonQuery::new(name.clone(), fallback),
            None => PersonQuery::from_env(fallback),
        };

        Ok(Self {
            config_dir,
            settings,
            adapter,
            platform_version,
            person,
            verbose: cli.verbose,
        })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load and resolve all configuration documents.
    pub fn resolve(&self) -> Result<ResolvedRun> {
        let engine = ConfigEngine::new(YamlDirLoader::new(&self.config_dir));
        Ok(engine.resolve(&self.adapter.id, &self.person)?)
    }

    /// Builtin resolvers, reordered by the `resolvers` setting.
    pub fn resolvers(&self) -> ResolverRegistry {
        ResolverRegistry::with_builtins().with_preference(&self.settings.resolvers)
    }

    pub fn probe_context(&self) -> ProbeContext {
        ProbeContext::new(&self.config_dir)
            .with_debug(self.verbose)
            .with_timeout(self.settings.probe_timeout())
    }

    /// Fail when the platform version is known and below the adapter's floor.
    pub fn check_platform_version(&self) -> Result<()> {
        match &self.platform_version {
            Some(version) => Ok(self.adapter.check_version(version)?),
            None => {
                tracing::debug!(
                    platform = %self.adapter.id,
                    "Platform version unknown, not checked"
                );
                Ok(())
            }
        }
    }

    /// Chef `--log_level`: `debug` when verbose, else the configured level.
    pub fn chef_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.settings.log_level
        }
    }
}
