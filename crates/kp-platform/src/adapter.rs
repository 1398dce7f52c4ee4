//! Platform adapters and the command templates they expose

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::id::PlatformId;

/// Attributes file handed to Chef with `-j`.
pub const ATTRIBUTES_FILE: &str = "kitchenplan-attributes.json";

/// Chef configuration file handed to Chef with `-c`.
pub const SOLO_CONFIG_FILE: &str = "solo.rb";

/// How a platform elevates a command to administrator rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegeWrapper {
    /// `/usr/bin/sudo <command>`
    Sudo,
    /// `runas /noprofile /user:Administrator cmd /c "<command>"`
    RunAs,
}

impl PrivilegeWrapper {
    /// Wrap a command line so it runs with elevated privileges.
    pub fn wrap(self, command: &str) -> String {
        match self {
            PrivilegeWrapper::Sudo => format!("/usr/bin/sudo {}", command),
            PrivilegeWrapper::RunAs => {
                format!("runas /noprofile /user:Administrator cmd /c \"{}\"", command)
            }
        }
    }
}

/// Parameters for one Chef run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChefInvocation {
    /// `chef-solo` when true, `chef-client -z` (local mode) otherwise
    pub use_solo: bool,
    pub log_level: String,
    /// Run list, in order
    pub recipes: Vec<String>,
}

impl ChefInvocation {
    /// A chef-solo run at `info` level.
    pub fn solo(recipes: Vec<String>) -> Self {
        Self {
            use_solo: true,
            log_level: "info".to_string(),
            recipes,
        }
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_solo(mut self, use_solo: bool) -> Self {
        self.use_solo = use_solo;
        self
    }
}

/// Descriptor for one supported platform family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformAdapter {
    /// Canonical identifier, also the platform-specific recipe scope
    pub id: PlatformId,
    /// Display name (e.g., "Red Hat Enterprise Linux")
    pub name: String,
    pub privilege: PrivilegeWrapper,
    /// Lowest platform version known to work
    pub min_version: Option<String>,
}

impl PlatformAdapter {
    /// Create an adapter that escalates with sudo and has no version floor.
    pub fn new(id: &str, name: impl Into<String>) -> Self {
        Self {
            id: PlatformId::new(id),
            name: name.into(),
            privilege: PrivilegeWrapper::Sudo,
            min_version: None,
        }
    }

    pub fn with_privilege(mut self, privilege: PrivilegeWrapper) -> Self {
        self.privilege = privilege;
        self
    }

    pub fn with_min_version(mut self, version: impl Into<String>) -> Self {
        self.min_version = Some(version.into());
        self
    }

    /// Format a command to run with elevated privileges. Execution happens elsewhere.
    pub fn run_privileged(&self, command: &str) -> String {
        self.privilege.wrap(command)
    }

    /// Command line that runs Chef against the generated attribute and solo files.
    pub fn chef_command(&self, invocation: &ChefInvocation) -> String {
        let chef_bin = if invocation.use_solo {
            "chef-solo"
        } else {
            "chef-client -z"
        };
        format!(
            "bin/{} --log_level {} -c {} -j {} -o {}",
            chef_bin,
            invocation.log_level,
            SOLO_CONFIG_FILE,
            ATTRIBUTES_FILE,
            invocation.recipes.join(",")
        )
    }

    /// Check a platform version against the adapter's floor.
    ///
    /// Adapters without a floor accept every version.
    pub fn version_supported(&self, version: &str) -> bool {
        match &self.min_version {
            Some(min) => compare_versions(version, min) != Ordering::Less,
            None => true,
        }
    }

    /// Fail with [`Error::VersionUnsupported`] when `version` is below the floor.
    pub fn check_version(&self, version: &str) -> Result<()> {
        match &self.min_version {
            Some(minimum) if !self.version_supported(version) => {
                Err(Error::VersionUnsupported {
                    platform: self.id.to_string(),
                    version: version.to_string(),
                    minimum: minimum.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Compare dotted versions segment by segment.
///
/// Numeric segments compare numerically, anything else lexically.
/// Missing trailing segments count as `0`, so `10.8` equals `10.8.0`.
fn compare_versions(left: &str, right: &str) -> Ordering {
    let left: Vec<&str> = left.trim().split('.').collect();
    let right: Vec<&str> = right.trim().split('.').collect();
    let len = left.len().max(right.len());

    for i in 0..len {
        let l = left.get(i).copied().unwrap_or("0");
        let r = right.get(i).copied().unwrap_or("0");
        let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
            (Ok(l), Ok(r)) => l.cmp(&r),
            _ => l.cmp(r),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
