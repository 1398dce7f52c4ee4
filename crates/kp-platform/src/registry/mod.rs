//! Platform registry
//!
//! All supported platforms are enumerated at compile time in `builtins`;
//! lookup goes through the alias table first, then straight to the adapter key.

mod builtins;
mod store;

pub use builtins::{BUILTIN_ALIASES, builtin_adapters};
pub use store::PlatformRegistry;
