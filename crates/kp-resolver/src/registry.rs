//! Resolver registry and first-present selection

use crate::backend::{ProbeContext, ResolverBackend};
use crate::berkshelf::Berkshelf;
use crate::error::{Error, Result};
use crate::librarian::Librarian;

/// Probe `candidates` in order and return the first that is present.
///
/// Stops probing at the first success. A probe error is logged and the
/// candidate treated as absent.
pub fn select<'a>(
    candidates: &'a [Box<dyn ResolverBackend>],
    context: &ProbeContext,
) -> Option<&'a dyn ResolverBackend> {
    for candidate in candidates {
        match candidate.probe(context) {
            Ok(true) => {
                tracing::debug!(resolver = candidate.name(), "Selected cookbook resolver");
                return Some(&**candidate);
            }
            Ok(false) => {
                tracing::debug!(resolver = candidate.name(), "Resolver not present");
            }
            Err(error) => {
                tracing::warn!(
                    resolver = candidate.name(),
                    %error,
                    "Resolver probe failed, treating as not present"
                );
            }
        }
    }

    tracing::warn!("No resolvers loaded. This could be a problem.");
    None
}

/// Turn an absent selection into [`Error::NoResolverSelected`].
///
/// Only steps that actually need cookbooks should call this.
pub fn require_resolver<'a>(
    selected: Option<&'a dyn ResolverBackend>,
    registry: &ResolverRegistry,
) -> Result<&'a dyn ResolverBackend> {
    selected.ok_or_else(|| Error::NoResolverSelected {
        tried: registry.names().join(", "),
    })
}

/// Ordered set of resolver backends.
///
/// Order is priority: [`ResolverRegistry::select`] probes front to back.
#[derive(Default)]
pub struct ResolverRegistry {
    backends: Vec<Box<dyn ResolverBackend>>,
}

impl ResolverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with Berkshelf ahead of librarian-chef.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Berkshelf::new()));
        registry.register(Box::new(Librarian::new()));
        registry
    }

    /// Append a backend at the lowest priority
    pub fn register(&mut self, backend: Box<dyn ResolverBackend>) {
        tracing::debug!(resolver = backend.name(), "Registered cookbook resolver");
        self.backends.push(backend);
    }

    /// Move the named backends to the front, in the given order.
    ///
    /// Names are matched case-insensitively. Unknown names are logged and
    /// skipped; unnamed backends keep their relative order behind the named
    /// ones.
    pub fn with_preference<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        let mut ordered = Vec::with_capacity(self.backends.len());
        for name in names {
            let name = name.as_ref();
            match self
                .backends
                .iter()
                .position(|b| b.name().eq_ignore_ascii_case(name))
            {
                Some(index) => ordered.push(self.backends.remove(index)),
                None => tracing::warn!(resolver = name, "Unknown resolver in preference list"),
            }
        }
        ordered.append(&mut self.backends);
        self.backends = ordered;
        self
    }

    /// Backend names in priority order
    pub fn names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Probe the registered backends in priority order.
    pub fn select(&self, context: &ProbeContext) -> Option<&dyn ResolverBackend> {
        select(&self.backends, context)
    }
}

impl std::fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("backends", &self.names())
            .finish()
    }
}
