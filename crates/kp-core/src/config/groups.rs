//! Transitive group closure

use std::collections::{HashSet, VecDeque};

use super::document::{ConfigDocument, DocumentKind};
use super::loader::DocumentLoader;
use crate::Result;

/// Groups reachable from a seed list, each exactly once, in breadth-first
/// discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedGroupSet {
    groups: Vec<(String, ConfigDocument)>,
}

impl ResolvedGroupSet {
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn documents(&self) -> impl Iterator<Item = &ConfigDocument> {
        self.groups.iter().map(|(_, doc)| doc)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigDocument)> {
        self.groups.iter().map(|(name, doc)| (name.as_str(), doc))
    }

    pub fn get(&self, name: &str) -> Option<&ConfigDocument> {
        self.groups
            .iter()
            .find(|(group, _)| group == name)
            .map(|(_, doc)| doc)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Expand `seeds` into every group they reference, directly or transitively.
///
/// A group missing from the loader contributes an empty document. Cycles and
/// repeated references are fine: each name is loaded once. Loader errors
/// other than absence propagate.
pub fn resolve_groups<L>(seeds: &[String], loader: &L) -> Result<ResolvedGroupSet>
where
    L: DocumentLoader + ?Sized,
{
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = seeds.iter().cloned().collect();
    let mut resolved = ResolvedGroupSet::default();

    while let Some(name) = queue.pop_front() {
        if !visited.insert(name.clone()) {
            continue;
        }

        let document = match loader.load(&DocumentKind::Group(name.clone()))? {
            Some(document) => document,
            None => {
                tracing::debug!(group = %name, "Group has no document, treating as empty");
                ConfigDocument::default()
            }
        };

        tracing::debug!(group = %name, references = ?document.groups, "Discovered group");
        queue.extend(
            document
                .groups
                .iter()
                .filter(|g| !visited.contains(*g))
                .cloned(),
        );
        resolved.groups.push((name, document));
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::MemoryLoader;
    use crate::Error;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn group(refs: &[&str]) -> ConfigDocument {
        ConfigDocument {
            groups: refs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn seeds(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_breadth_first_order() {
        let loader = MemoryLoader::new()
            .with_group("a", group(&["c", "d"]))
            .with_group("b", group(&["e"]))
            .with_group("c", group(&[]))
            .with_group("d", group(&[]))
            .with_group("e", group(&[]));

        let resolved = resolve_groups(&seeds(&["a", "b"]), &loader).unwrap();
        assert_eq!(resolved.names(), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_self_reference() {
        let loader = MemoryLoader::new().with_group("a", group(&["a"]));
        let resolved = resolve_groups(&seeds(&["a"]), &loader).unwrap();
        assert_eq!(resolved.names(), vec!["a"]);
    }

    #[test]
    fn test_mutual_cycle() {
        let loader = MemoryLoader::new()
            .with_group("a", group(&["b"]))
            .with_group("b", group(&["a"]));
        let resolved = resolve_groups(&seeds(&["a"]), &loader).unwrap();
        assert_eq!(resolved.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_seeds_and_diamond() {
        let loader = MemoryLoader::new()
            .with_group("left", group(&["base"]))
            .with_group("right", group(&["base"]))
            .with_group("base", group(&[]));
        let resolved = resolve_groups(&seeds(&["left", "right", "left"]), &loader).unwrap();
        assert_eq!(resolved.names(), vec!["left", "right", "base"]);
    }

    #[test]
    fn test_missing_group_is_empty() {
        let loader = MemoryLoader::new().with_group("a", group(&["ghost"]));
        let resolved = resolve_groups(&seeds(&["a"]), &loader).unwrap();
        assert_eq!(resolved.names(), vec!["a", "ghost"]);
        assert_eq!(resolved.get("ghost"), Some(&ConfigDocument::default()));
    }

    #[test]
    fn test_each_group_loaded_once() {
        let calls = RefCell::new(Vec::new());
        let loader = |kind: &DocumentKind| -> Result<Option<ConfigDocument>> {
            calls.borrow_mut().push(kind.clone());
            Ok(Some(group(&["a", "b"])))
        };

        let resolved = resolve_groups(&seeds(&["a", "b", "a"]), &loader).unwrap();
        assert_eq!(resolved.len(), 2);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_loader_error_propagates() {
        let loader = |kind: &DocumentKind| -> Result<Option<ConfigDocument>> {
            match kind {
                DocumentKind::Group(name) if name == "bad" => {
                    Err(Error::parse("groups/bad.yml", "unexpected token"))
                }
                _ => Ok(Some(group(&["bad"]))),
            }
        };
        let err = resolve_groups(&seeds(&["good"]), &loader).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_empty_seeds() {
        let resolved = resolve_groups(&[], &MemoryLoader::new()).unwrap();
        assert!(resolved.is_empty());
    }
}
