//! Shared test utilities for the Kitchenplan workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`config_dir`]: [`config_dir::TestConfigDir`] builder for a throwaway
//!   Kitchenplan checkout

pub mod config_dir;

pub use config_dir::TestConfigDir;
