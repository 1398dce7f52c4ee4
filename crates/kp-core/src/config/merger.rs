//! Layered recipe and attribute merge

use kp_platform::PlatformId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use super::document::{ConfigDocument, GLOBAL_SCOPE};
use super::groups::ResolvedGroupSet;

/// Final recipe run list and attribute tree for one machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    /// Recipe names, duplicate-free, in first-appearance order
    pub recipes: Vec<String>,

    /// Top-level attributes, each taken whole from the last layer defining it
    pub attributes: Map<String, Value>,
}

impl ResolvedConfig {
    /// Attribute tree as a JSON object
    pub fn attributes_value(&self) -> Value {
        Value::Object(self.attributes.clone())
    }
}

/// Merge layers in precedence order: default, groups in discovery order,
/// then person.
///
/// Within each layer `global` recipes come before those for `platform`.
/// Attributes are replaced per top-level key, never merged deeply.
pub fn merge(
    platform: &PlatformId,
    default: Option<&ConfigDocument>,
    person: Option<&ConfigDocument>,
    groups: &ResolvedGroupSet,
) -> ResolvedConfig {
    let layers = default
        .into_iter()
        .chain(groups.documents())
        .chain(person);

    let mut merged = ResolvedConfig::default();
    let mut seen: HashSet<String> = HashSet::new();

    for layer in layers {
        for scope in [GLOBAL_SCOPE, platform.as_str()] {
            for recipe in layer.recipes_for(scope) {
                if seen.insert(recipe.clone()) {
                    merged.recipes.push(recipe.clone());
                }
            }
        }

        for (key, value) in &layer.attributes {
            merged.attributes.insert(key.clone(), value.clone());
        }
    }

    tracing::debug!(
        platform = %platform,
        recipes = merged.recipes.len(),
        attributes = merged.attributes.len(),
        "Merged configuration"
    );
    merged
}
