//! [`TestConfigDir`] builder for Kitchenplan test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary Kitchenplan checkout with helpers for writing documents and
/// asserting on generated files.
///
/// # Example
///
/// ```rust
/// use kp_test_utils::TestConfigDir;
///
/// let dir = TestConfigDir::new()
///     .with_default("recipes:\n  global: [git]\n")
///     .with_person("roderik", "groups: [dev]\n")
///     .with_group("dev", "recipes:\n  global: [vim]\n");
///
/// dir.assert_file_exists("config/groups/dev.yml");
/// ```
pub struct TestConfigDir {
    temp_dir: TempDir,
}

impl Default for TestConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl TestConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the checkout, the value passed as `--config-dir`.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
        self
    }

    pub fn write_default(&self, yaml: &str) -> &Self {
        self.write_file("config/default.yml", yaml)
    }

    pub fn write_person(&self, name: &str, yaml: &str) -> &Self {
        self.write_file(&format!("config/people/{name}.yml"), yaml)
    }

    pub fn write_group(&self, name: &str, yaml: &str) -> &Self {
        self.write_file(&format!("config/groups/{name}.yml"), yaml)
    }

    pub fn with_default(self, yaml: &str) -> Self {
        self.write_default(yaml);
        self
    }

    pub fn with_person(self, name: &str, yaml: &str) -> Self {
        self.write_person(name, yaml);
        self
    }

    pub fn with_group(self, name: &str, yaml: &str) -> Self {
        self.write_group(name, yaml);
        self
    }

    pub fn with_file(self, relative: &str, content: &str) -> Self {
        self.write_file(relative, content);
        self
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Assert that `relative` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that `relative` does **not** exist.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(
            !path.exists(),
            "Expected file NOT to exist: {}",
            path.display()
        );
    }

    /// Assert that the file at `relative` contains `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {relative} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_layout() {
        let dir = TestConfigDir::new()
            .with_default("groups: []\n")
            .with_person("alice", "groups: [dev]\n")
            .with_group("dev", "")
            .with_file("Berksfile", "source 'https://supermarket.chef.io'\n");

        dir.assert_file_exists("config/default.yml");
        dir.assert_file_exists("config/people/alice.yml");
        dir.assert_file_exists("config/groups/dev.yml");
        dir.assert_file_contains("Berksfile", "supermarket");
        dir.assert_file_not_exists("Cheffile");
    }
}
