//! Person identity and document lookup

use super::document::{ConfigDocument, DocumentKind};
use super::loader::DocumentLoader;
use crate::{Error, Result};

/// Person whose document is used when the invoking user has none
pub const DEFAULT_FALLBACK_PERSON: &str = "roderik";

const IDENTITY_VARS: [&str; 3] = ["USER", "USERNAME", "LOGNAME"];

/// Which person document to look for, and what to fall back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonQuery {
    pub identity: String,
    pub fallback: String,
}

impl PersonQuery {
    pub fn new(identity: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            fallback: fallback.into(),
        }
    }

    /// Query for the invoking user. Uses the fallback as identity when the
    /// environment names nobody.
    pub fn from_env(fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        let identity = current_identity().unwrap_or_else(|| fallback.clone());
        Self { identity, fallback }
    }
}

/// A located person document.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonDocument {
    /// Name whose document was found
    pub name: String,
    pub document: ConfigDocument,
    /// Whether the fallback person was used
    pub fell_back: bool,
}

/// Login name of the invoking user from `USER`, `USERNAME` or `LOGNAME`.
pub fn current_identity() -> Option<String> {
    identity_from(|var| std::env::var(var).ok())
}

fn identity_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    IDENTITY_VARS
        .into_iter()
        .filter_map(|var| lookup(var))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Load `people/<identity>`, or `people/<fallback>` when that is absent.
///
/// Fails with [`Error::ConfigMissing`] when neither exists.
pub fn locate_person<L>(loader: &L, identity: &str, fallback: &str) -> Result<PersonDocument>
where
    L: DocumentLoader + ?Sized,
{
    if let Some(document) = loader.load(&DocumentKind::Person(identity.to_string()))? {
        tracing::debug!(person = identity, "Loaded person document");
        return Ok(PersonDocument {
            name: identity.to_string(),
            document,
            fell_back: false,
        });
    }

    tracing::debug!(
        person = identity,
        fallback,
        "No person document, trying fallback"
    );
    match loader.load(&DocumentKind::Person(fallback.to_string()))? {
        Some(document) => Ok(PersonDocument {
            name: fallback.to_string(),
            document,
            fell_back: true,
        }),
        None => Err(Error::ConfigMissing {
            identity: identity.to_string(),
            fallback: fallback.to_string(),
        }),
    }
}
