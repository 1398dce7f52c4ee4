//! Configuration documents and their resolution
//!
//! Resolution runs in three steps:
//! 1. Load the default document and locate the person document
//! 2. Expand their `groups` references into the full group closure
//! 3. Merge default, groups and person into a [`ResolvedConfig`]
//!
//! [`ConfigEngine`] performs all three against any [`DocumentLoader`].

mod document;
mod engine;
mod groups;
mod loader;
mod merger;
mod person;
mod settings;

pub use document::{ConfigDocument, DocumentKind, GLOBAL_SCOPE};
pub use engine::{ConfigEngine, ResolvedRun};
pub use groups::{ResolvedGroupSet, resolve_groups};
pub use loader::{DOCUMENTS_DIR, DocumentLoader, MemoryLoader, YamlDirLoader};
pub use merger::{ResolvedConfig, merge};
pub use person::{
    DEFAULT_FALLBACK_PERSON, PersonDocument, PersonQuery, current_identity, locate_person,
};
pub use settings::{SETTINGS_FILE, Settings};
