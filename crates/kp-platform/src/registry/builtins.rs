//! Built-in platform adapters and the family alias table

use crate::adapter::{PlatformAdapter, PrivilegeWrapper};

/// Raw platform families that share an adapter with another family.
///
/// Keys are canonical (see [`crate::canonicalize`]); values are adapter keys.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("centos", "rhel"),
    ("redhat", "rhel"),
    ("amazon", "rhel"),
    ("xenserver", "rhel"),
    ("oracle", "rhel"),
    ("debian", "debian"),
    ("ubuntu", "debian"),
    ("mac_os", "mac_os_x"),
    ("macos", "mac_os_x"),
    ("darwin", "mac_os_x"),
];

/// Returns every built-in platform adapter.
pub fn builtin_adapters() -> Vec<PlatformAdapter> {
    vec![
        PlatformAdapter::new("rhel", "Red Hat Enterprise Linux").with_min_version("5.8"),
        PlatformAdapter::new("debian", "Debian").with_min_version("6"),
        PlatformAdapter::new("mac_os_x", "Mac OS X").with_min_version("10.7"),
        PlatformAdapter::new("windows", "Windows").with_privilege(PrivilegeWrapper::RunAs),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::canonicalize;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_unique() {
        let adapters = builtin_adapters();
        let ids: HashSet<_> = adapters.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), adapters.len());
    }

    #[test]
    fn test_aliases_point_at_builtins() {
        let adapters = builtin_adapters();
        for (alias, target) in BUILTIN_ALIASES {
            assert!(
                adapters.iter().any(|a| a.id.as_str() == *target),
                "alias '{}' points at unknown adapter '{}'",
                alias,
                target
            );
        }
    }

    #[test]
    fn test_alias_keys_are_canonical() {
        for (alias, _) in BUILTIN_ALIASES {
            assert_eq!(canonicalize(alias), *alias);
        }
    }
}
