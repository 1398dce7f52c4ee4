//! Platform support for Kitchenplan.
//!
//! Maps the platform family reported for a machine (`centos`, `ubuntu`,
//! `Mac OS X`, ...) onto one of a small set of statically registered
//! platform adapters. An adapter carries the platform-specific command
//! templates the rest of the application needs: the privilege-escalation
//! wrapper and the Chef invocation.
//!
//! # Example
//!
//! ```
//! use kp_platform::PlatformRegistry;
//!
//! let registry = PlatformRegistry::with_builtins();
//! let adapter = registry.resolve("centos").unwrap();
//! assert_eq!(adapter.id.as_str(), "rhel");
//! ```

pub mod adapter;
pub mod detect;
pub mod error;
pub mod id;
pub mod registry;

pub use adapter::{
    ATTRIBUTES_FILE, ChefInvocation, PlatformAdapter, PrivilegeWrapper, SOLO_CONFIG_FILE,
};
pub use detect::{
    detect_platform_family, detect_platform_version, family_from_os_release,
    version_from_os_release, version_from_ver_output,
};
pub use error::{Error, Result};
pub use id::{PlatformId, canonicalize};
pub use registry::{BUILTIN_ALIASES, PlatformRegistry, builtin_adapters};
