//! Kitchenplan configuration engine
//!
//! Combines a default document, a per-person document and the transitive
//! closure of group documents into one ordered recipe list and one merged
//! attribute tree for a given platform.
//!
//! ```
//! use kp_core::config::{ConfigEngine, MemoryLoader, PersonQuery};
//! use kp_platform::PlatformId;
//!
//! let loader = MemoryLoader::new()
//!     .with_default_yaml("recipes: { global: [git] }\ngroups: [dev]")
//!     .unwrap()
//!     .with_group_yaml("dev", "recipes: { global: [vim] }")
//!     .unwrap()
//!     .with_person_yaml("roderik", "attributes: { editor: vim }")
//!     .unwrap();
//!
//! let run = ConfigEngine::new(loader)
//!     .resolve(&PlatformId::new("debian"), &PersonQuery::new("nobody", "roderik"))
//!     .unwrap();
//!
//! assert_eq!(run.config.recipes, vec!["git", "vim"]);
//! assert_eq!(run.person, "roderik");
//! ```

pub mod config;
pub mod error;

pub use error::{Error, Result};
