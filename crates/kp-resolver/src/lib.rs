//! Cookbook dependency resolvers for Kitchenplan.
//!
//! A resolver backend is an external cookbook-vendoring tool (Berkshelf,
//! librarian-chef). Backends are probed in priority order against the
//! configuration directory and the first one that is present wins.
//!
//! Backends only produce command strings; running them is the caller's job.

pub mod backend;
pub mod berkshelf;
pub mod error;
pub mod librarian;
pub mod probe;
pub mod registry;

pub use backend::{DEFAULT_PROBE_TIMEOUT, ProbeContext, ResolverBackend};
pub use berkshelf::Berkshelf;
pub use error::{Error, ProbeError, Result};
pub use librarian::Librarian;
pub use probe::probe_command;
pub use registry::{ResolverRegistry, require_resolver, select};
