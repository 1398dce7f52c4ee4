//! Host platform detection
//!
//! Produces the raw platform family and release version of the running
//! machine. The family is not canonicalized or de-aliased; feed it to
//! [`crate::PlatformRegistry::resolve`].

use std::fs;
use std::process::Command;

const OS_RELEASE: &str = "/etc/os-release";

/// Detect the platform family of the running host.
///
/// - macOS reports `mac_os_x`
/// - Windows reports `windows`
/// - Linux reports `ID` from `/etc/os-release`, falling back to the first
///   `ID_LIKE` entry and finally to `linux`
/// - anything else reports the Rust target OS name
pub fn detect_platform_family() -> String {
    match std::env::consts::OS {
        "macos" => "mac_os_x".to_string(),
        "windows" => "windows".to_string(),
        "linux" => match fs::read_to_string(OS_RELEASE) {
            Ok(content) => family_from_os_release(&content).unwrap_or_else(|| "linux".to_string()),
            Err(e) => {
                tracing::debug!("Could not read {}: {}", OS_RELEASE, e);
                "linux".to_string()
            }
        },
        other => other.to_string(),
    }
}

/// Extract the platform family from the contents of an os-release file.
pub fn family_from_os_release(content: &str) -> Option<String> {
    os_release_value(content, "ID").or_else(|| {
        os_release_value(content, "ID_LIKE")
            .and_then(|like| like.split_whitespace().next().map(str::to_string))
    })
}

/// Detect the release version of the running host.
///
/// - Linux reports `VERSION_ID` from `/etc/os-release`
/// - macOS reports `sw_vers -productVersion`
/// - Windows reports the number printed by `ver`
///
/// Returns `None` when the version cannot be determined.
pub fn detect_platform_version() -> Option<String> {
    match std::env::consts::OS {
        "linux" => match fs::read_to_string(OS_RELEASE) {
            Ok(content) => version_from_os_release(&content),
            Err(e) => {
                tracing::debug!("Could not read {}: {}", OS_RELEASE, e);
                None
            }
        },
        "macos" => command_stdout("sw_vers", &["-productVersion"])
            .map(|out| out.trim().to_string())
            .filter(|version| !version.is_empty()),
        "windows" => {
            command_stdout("cmd", &["/C", "ver"]).and_then(|out| version_from_ver_output(&out))
        }
        _ => None,
    }
}

/// Extract `VERSION_ID` from the contents of an os-release file.
pub fn version_from_os_release(content: &str) -> Option<String> {
    os_release_value(content, "VERSION_ID")
}

/// Extract the version number from Windows `ver` output such as
/// `Microsoft Windows [Version 10.0.19045.3570]`.
pub fn version_from_ver_output(output: &str) -> Option<String> {
    let (_, rest) = output.split_once("Version")?;
    let version: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    (!version.is_empty()).then_some(version)
}

/// Last non-empty value assigned to `wanted`, with quotes removed.
fn os_release_value(content: &str, wanted: &str) -> Option<String> {
    let mut found = None;
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
        if key.trim() == wanted && !value.is_empty() {
            found = Some(value.to_string());
        }
    }
    found
}

fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            tracing::debug!(program, status = ?output.status, "Version helper failed");
            None
        }
        Err(e) => {
            tracing::debug!(program, "Could not run version helper: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_release_ubuntu() {
        let content = r#"NAME="Ubuntu"
VERSION="22.04.3 LTS (Jammy Jellyfish)"
ID=ubuntu
ID_LIKE=debian
"#;
        assert_eq!(family_from_os_release(content), Some("ubuntu".to_string()));
    }

    #[test]
    fn test_os_release_quoted_id() {
        let content = "NAME=\"CentOS Linux\"\nID=\"centos\"\nID_LIKE=\"rhel fedora\"\n";
        assert_eq!(family_from_os_release(content), Some("centos".to_string()));
    }

    #[test]
    fn test_os_release_falls_back_to_id_like() {
        let content = "NAME=Custom\nID_LIKE=\"rhel fedora\"\n";
        assert_eq!(family_from_os_release(content), Some("rhel".to_string()));
    }

    #[test]
    fn test_os_release_ignores_comments_and_junk() {
        let content = "# ID=commented\nnot a pair\nID=debian\n";
        assert_eq!(family_from_os_release(content), Some("debian".to_string()));
    }

    #[test]
    fn test_os_release_empty() {
        assert_eq!(family_from_os_release(""), None);
    }

    #[test]
    fn test_version_from_os_release() {
        let content = "NAME=\"CentOS Linux\"\nVERSION=\"7 (Core)\"\nID=centos\nVERSION_ID=\"7\"\n";
        assert_eq!(version_from_os_release(content), Some("7".to_string()));
        assert_eq!(version_from_os_release("ID=arch\n"), None);
    }

    #[test]
    fn test_version_from_ver_output() {
        assert_eq!(
            version_from_ver_output("\r\nMicrosoft Windows [Version 10.0.19045.3570]\r\n"),
            Some("10.0.19045.3570".to_string())
        );
        assert_eq!(version_from_ver_output("garbage"), None);
    }

    #[test]
    fn test_detect_returns_something() {
        assert!(!detect_platform_family().is_empty());
    }
}
