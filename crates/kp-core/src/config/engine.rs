//! End-to-end configuration resolution

use kp_platform::PlatformId;

use super::document::DocumentKind;
use super::groups::resolve_groups;
use super::loader::DocumentLoader;
use super::merger::{ResolvedConfig, merge};
use super::person::{PersonQuery, locate_person};
use crate::Result;

/// Everything one resolution produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRun {
    pub platform: PlatformId,
    /// Person whose document was used
    pub person: String,
    /// Whether that person is the fallback
    pub fell_back: bool,
    /// Group names in discovery order
    pub groups: Vec<String>,
    pub config: ResolvedConfig,
}

/// Loads documents through `L` and resolves them into a [`ResolvedRun`].
///
/// Holds no state between calls.
#[derive(Debug, Clone)]
pub struct ConfigEngine<L> {
    loader: L,
}

impl<L: DocumentLoader> ConfigEngine<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolve the configuration for `platform` and the queried person.
    ///
    /// Group seeds are the default document's `groups` followed by the
    /// person document's.
    pub fn resolve(&self, platform: &PlatformId, query: &PersonQuery) -> Result<ResolvedRun> {
        let default = self.loader.load(&DocumentKind::Default)?;
        if default.is_none() {
            tracing::debug!("No default document");
        }

        let person = locate_person(&self.loader, &query.identity, &query.fallback)?;

        let seeds: Vec<String> = default
            .iter()
            .flat_map(|doc| doc.groups.iter())
            .chain(person.document.groups.iter())
            .cloned()
            .collect();
        let groups = resolve_groups(&seeds, &self.loader)?;

        let config = merge(platform, default.as_ref(), Some(&person.document), &groups);

        tracing::debug!(
            %platform,
            person = %person.name,
            groups = groups.len(),
            "Resolved configuration"
        );
        Ok(ResolvedRun {
            platform: platform.clone(),
            groups: groups.names().into_iter().map(str::to_string).collect(),
            person: person.name,
            fell_back: person.fell_back,
            config,
        })
    }
}
