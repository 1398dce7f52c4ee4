//! Configuration document model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Recipe scope applied on every platform
pub const GLOBAL_SCOPE: &str = "global";

/// One default, person or group document.
///
/// A YAML `null` for any recognized field, or for a single recipe scope,
/// reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    /// Recipe lists keyed by scope: `global` or a platform identifier
    #[serde(default, deserialize_with = "recipe_scopes")]
    pub recipes: BTreeMap<String, Vec<String>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Map<String, Value>,

    /// Names of further group documents to pull in
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<String>,

    /// Unrecognized top-level fields, kept but never interpreted
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ConfigDocument {
    /// Parse a YAML document. `origin` is only used in error messages.
    ///
    /// Blank input and a bare `null` both yield an empty document. Merge
    /// keys (`<<: *anchor`) are expanded before the fields are read.
    pub fn from_yaml(content: &str, origin: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| Error::parse(origin, e))?;
        value.apply_merge().map_err(|e| Error::parse(origin, e))?;
        let document: Option<Self> =
            serde_yaml::from_value(value).map_err(|e| Error::parse(origin, e))?;
        Ok(document.unwrap_or_default())
    }

    /// Recipes listed under `scope`, empty when the scope is absent.
    pub fn recipes_for(&self, scope: &str) -> &[String] {
        self.recipes.get(scope).map(Vec::as_slice).unwrap_or_default()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn recipe_scopes<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let scopes: Option<BTreeMap<String, Option<Vec<String>>>> =
        Option::deserialize(deserializer)?;
    Ok(scopes
        .unwrap_or_default()
        .into_iter()
        .map(|(scope, recipes)| (scope, recipes.unwrap_or_default()))
        .collect())
}

/// Which document a loader is asked for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Default,
    Person(String),
    Group(String),
}

impl DocumentKind {
    /// Location relative to the `config/` directory.
    pub fn relative_path(&self) -> PathBuf {
        match self {
            Self::Default => PathBuf::from("default.yml"),
            Self::Person(name) => Path::new("people").join(format!("{name}.yml")),
            Self::Group(name) => Path::new("groups").join(format!("{name}.yml")),
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Person(name) => write!(f, "person '{name}'"),
            Self::Group(name) => write!(f, "group '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(content: &str) -> ConfigDocument {
        ConfigDocument::from_yaml(content, Path::new("test.yml")).unwrap()
    }

    #[test]
    fn test_full_document() {
        let doc = parse(
            r#"
recipes:
  global: [git, vim]
  mac_os_x: [iterm2]
attributes:
  homebrew:
    casks: [firefox]
  timezone: Europe/Brussels
groups: [developer, designer]
"#,
        );

        assert_eq!(doc.recipes_for("global"), ["git", "vim"]);
        assert_eq!(doc.recipes_for("mac_os_x"), ["iterm2"]);
        assert!(doc.recipes_for("debian").is_empty());
        assert_eq!(doc.groups, vec!["developer", "designer"]);
        assert_eq!(doc.attributes["timezone"], json!("Europe/Brussels"));
        assert_eq!(doc.attributes["homebrew"], json!({ "casks": ["firefox"] }));
        assert!(doc.extra.is_empty());
    }

    #[test]
    fn test_nulls_read_as_empty() {
        let doc = parse("recipes:\n  global:\n  debian: ~\nattributes:\ngroups: null\n");
        assert!(doc.recipes_for("global").is_empty());
        assert!(doc.recipes_for("debian").is_empty());
        assert!(doc.attributes.is_empty());
        assert!(doc.groups.is_empty());
    }

    #[test]
    fn test_blank_and_null_documents() {
        assert_eq!(parse(""), ConfigDocument::default());
        assert_eq!(parse("   \n"), ConfigDocument::default());
        assert_eq!(parse("~"), ConfigDocument::default());
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        let doc = parse("recipes: {}\nmaintainer: roderik\n");
        assert_eq!(doc.extra.get("maintainer"), Some(&json!("roderik")));
    }

    #[test]
    fn test_malformed_document_reports_origin() {
        let err = ConfigDocument::from_yaml("groups: {a: 1}", Path::new("config/groups/x.yml"))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ConfigParse { ref path, .. } if path == Path::new("config/groups/x.yml")
        ));
    }

    #[test]
    fn test_merge_keys_are_expanded() {
        let doc = parse(
            r#"
shared: &shared
  editor: vim
  shell: bash
attributes:
  <<: *shared
  shell: zsh
recipes:
  global: [git]
"#,
        );

        assert_eq!(doc.attributes.get("<<"), None);
        assert_eq!(doc.attributes["editor"], json!("vim"));
        assert_eq!(doc.attributes["shell"], json!("zsh"));
        assert_eq!(doc.extra["shared"], json!({ "editor": "vim", "shell": "bash" }));
    }

    #[test]
    fn test_relative_paths() {
        assert_eq!(DocumentKind::Default.relative_path(), PathBuf::from("default.yml"));
        assert_eq!(
            DocumentKind::Person("roderik".into()).relative_path(),
            Path::new("people").join("roderik.yml")
        );
        assert_eq!(
            DocumentKind::Group("developer".into()).relative_path(),
            Path::new("groups").join("developer.yml")
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DocumentKind::Group("dev".into()).to_string(), "group 'dev'");
        assert_eq!(DocumentKind::Default.to_string(), "default");
    }
}
