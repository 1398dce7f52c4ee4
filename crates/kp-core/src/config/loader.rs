//! Document loaders
//!
//! A loader answers "give me this document" with `Ok(None)` when it does not
//! exist. Absence is never an error at this layer; callers decide what a
//! missing document means.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::document::{ConfigDocument, DocumentKind};
use crate::{Error, Result};

/// Directory under the config root holding all documents
pub const DOCUMENTS_DIR: &str = "config";

const TEMPLATE_TAG: &str = "<%";

/// Source of configuration documents.
pub trait DocumentLoader {
    fn load(&self, kind: &DocumentKind) -> Result<Option<ConfigDocument>>;
}

impl<F> DocumentLoader for F
where
    F: Fn(&DocumentKind) -> Result<Option<ConfigDocument>>,
{
    fn load(&self, kind: &DocumentKind) -> Result<Option<ConfigDocument>> {
        self(kind)
    }
}

/// Reads YAML documents from `<config_dir>/config/`.
#[derive(Debug, Clone)]
pub struct YamlDirLoader {
    root: PathBuf,
}

impl YamlDirLoader {
    /// Create a loader for a Kitchenplan checkout at `config_dir`.
    pub fn new(config_dir: impl AsRef<Path>) -> Self {
        Self {
            root: config_dir.as_ref().join(DOCUMENTS_DIR),
        }
    }

    /// Full path a document would be read from
    pub fn path_for(&self, kind: &DocumentKind) -> PathBuf {
        self.root.join(kind.relative_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentLoader for YamlDirLoader {
    fn load(&self, kind: &DocumentKind) -> Result<Option<ConfigDocument>> {
        let path = self.path_for(kind);
        if !path.is_file() {
            tracing::debug!(?path, %kind, "Document not found");
            return Ok(None);
        }

        tracing::debug!(?path, %kind, "Loading document");
        let content = fs::read_to_string(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        if content.contains(TEMPLATE_TAG) {
            return Err(Error::parse(
                &path,
                "templated documents are not supported; replace `<% %>` tags with plain YAML",
            ));
        }
        ConfigDocument::from_yaml(&content, &path).map(Some)
    }
}

/// In-memory documents, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    documents: HashMap<DocumentKind, ConfigDocument>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: DocumentKind, document: ConfigDocument) {
        self.documents.insert(kind, document);
    }

    pub fn with_default(mut self, document: ConfigDocument) -> Self {
        self.insert(DocumentKind::Default, document);
        self
    }

    pub fn with_person(mut self, name: impl Into<String>, document: ConfigDocument) -> Self {
        self.insert(DocumentKind::Person(name.into()), document);
        self
    }

    pub fn with_group(mut self, name: impl Into<String>, document: ConfigDocument) -> Self {
        self.insert(DocumentKind::Group(name.into()), document);
        self
    }

    pub fn with_default_yaml(self, content: &str) -> Result<Self> {
        self.with_yaml(DocumentKind::Default, content)
    }

    pub fn with_person_yaml(self, name: impl Into<String>, content: &str) -> Result<Self> {
        self.with_yaml(DocumentKind::Person(name.into()), content)
    }

    pub fn with_group_yaml(self, name: impl Into<String>, content: &str) -> Result<Self> {
        self.with_yaml(DocumentKind::Group(name.into()), content)
    }

    fn with_yaml(mut self, kind: DocumentKind, content: &str) -> Result<Self> {
        let document = ConfigDocument::from_yaml(content, &kind.relative_path())?;
        self.insert(kind, document);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentLoader for MemoryLoader {
    fn load(&self, kind: &DocumentKind) -> Result<Option<ConfigDocument>> {
        Ok(self.documents.get(kind).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(DOCUMENTS_DIR).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_yaml_loader_reads_documents() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "default.yml", "recipes:\n  global: [git]\n");
        write(temp.path(), "groups/dev.yml", "groups: [base]\n");

        let loader = YamlDirLoader::new(temp.path());
        let default = loader.load(&DocumentKind::Default).unwrap().unwrap();
        assert_eq!(default.recipes_for("global"), ["git"]);

        let dev = loader
            .load(&DocumentKind::Group("dev".into()))
            .unwrap()
            .unwrap();
        assert_eq!(dev.groups, vec!["base"]);
    }

    #[test]
    fn test_yaml_loader_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let loader = YamlDirLoader::new(temp.path());
        assert!(loader.load(&DocumentKind::Default).unwrap().is_none());
        assert!(
            loader
                .load(&DocumentKind::Person("nobody".into()))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_yaml_loader_malformed_is_error() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "groups/broken.yml", "recipes: [not, a, map]\n");

        let loader = YamlDirLoader::new(temp.path());
        let err = loader
            .load(&DocumentKind::Group("broken".into()))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_yaml_loader_rejects_templates() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "groups/dev.yml",
            "attributes:\n  home: <%= ENV['HOME'] %>\n",
        );

        let loader = YamlDirLoader::new(temp.path());
        let err = loader.load(&DocumentKind::Group("dev".into())).unwrap_err();
        match err {
            Error::ConfigParse { path, reason } => {
                assert!(path.ends_with("groups/dev.yml"));
                assert!(reason.contains("templated documents are not supported"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_yaml_loader_paths() {
        let loader = YamlDirLoader::new("/srv/kitchenplan");
        assert_eq!(
            loader.path_for(&DocumentKind::Person("roderik".into())),
            Path::new("/srv/kitchenplan/config/people/roderik.yml")
        );
    }

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new()
            .with_group("dev", ConfigDocument::default())
            .with_person_yaml("roderik", "groups: [dev]")
            .unwrap();

        assert_eq!(loader.len(), 2);
        assert!(loader.load(&DocumentKind::Default).unwrap().is_none());
        let person = loader
            .load(&DocumentKind::Person("roderik".into()))
            .unwrap()
            .unwrap();
        assert_eq!(person.groups, vec!["dev"]);
    }

    #[test]
    fn test_closure_loader() {
        let loader = |kind: &DocumentKind| -> Result<Option<ConfigDocument>> {
            Ok(matches!(kind, DocumentKind::Default).then(ConfigDocument::default))
        };
        assert!(loader.load(&DocumentKind::Default).unwrap().is_some());
        assert!(loader.load(&DocumentKind::Group("x".into())).unwrap().is_none());
    }
}
