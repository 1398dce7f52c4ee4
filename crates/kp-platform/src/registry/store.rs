//! Platform registry storage

use std::collections::HashMap;

use crate::adapter::PlatformAdapter;
use crate::error::{Error, Result};
use crate::id::canonicalize;

/// Registry of platform adapters keyed by canonical id, plus the alias table.
#[derive(Debug, Clone)]
pub struct PlatformRegistry {
    adapters: HashMap<String, PlatformAdapter>,
    aliases: HashMap<String, String>,
}

impl PlatformRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Create a registry with all built-in adapters and aliases.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for adapter in super::builtins::builtin_adapters() {
            registry.register(adapter);
        }
        for (alias, target) in super::builtins::BUILTIN_ALIASES {
            registry.alias(alias, target);
        }
        registry
    }

    /// Register an adapter under its id, replacing any previous one.
    pub fn register(&mut self, adapter: PlatformAdapter) {
        self.adapters
            .insert(adapter.id.as_str().to_string(), adapter);
    }

    /// Route the `family` spelling to the adapter registered as `target`.
    pub fn alias(&mut self, family: &str, target: &str) {
        self.aliases
            .insert(canonicalize(family), canonicalize(target));
    }

    /// Get an adapter by exact canonical id (no alias lookup).
    pub fn get(&self, id: &str) -> Option<&PlatformAdapter> {
        self.adapters.get(id)
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// List registered adapter ids (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.adapters.keys().map(|s| s.as_str()).collect();
        ids.sort();
        ids
    }

    /// Families aliased onto the given adapter id (sorted).
    pub fn aliases_for(&self, id: &str) -> Vec<&str> {
        let mut families: Vec<_> = self
            .aliases
            .iter()
            .filter(|(family, target)| target.as_str() == id && family.as_str() != id)
            .map(|(family, _)| family.as_str())
            .collect();
        families.sort();
        families
    }

    /// The adapter key a raw family maps to, whether or not it is registered.
    pub fn adapter_key(&self, raw: &str) -> String {
        let canonical = canonicalize(raw);
        match self.aliases.get(&canonical) {
            Some(target) => target.clone(),
            None => canonical,
        }
    }

    /// Resolve a raw platform family to its adapter.
    ///
    /// The input is canonicalized, looked up in the alias table and, failing
    /// that, tried directly as an adapter key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlatformUnsupported`] carrying the raw input when no
    /// adapter matches.
    pub fn resolve(&self, raw: &str) -> Result<&PlatformAdapter> {
        let key = self.adapter_key(raw);
        match self.adapters.get(&key) {
            Some(adapter) => {
                tracing::debug!(family = raw, adapter = %adapter.id, "Resolved platform");
                Ok(adapter)
            }
            None => Err(Error::PlatformUnsupported {
                platform: raw.to_string(),
            }),
        }
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::new()
    }
}
