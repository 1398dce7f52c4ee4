//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kitchenplan - Provision a workstation from layered Chef configuration
#[derive(Parser, Debug)]
#[command(name = "kitchenplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging and verbose resolver output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Kitchenplan checkout holding config/, Berksfile or Cheffile
    #[arg(
        short,
        long,
        global = true,
        env = "KITCHENPLAN_CONFIG_DIR",
        default_value = "."
    )]
    pub config_dir: PathBuf,

    /// Platform family to use instead of detecting the host (e.g. centos, ubuntu)
    #[arg(long, global = true)]
    pub platform: Option<String>,

    /// Platform release to check against the supported floor (e.g. 7, 10.9).
    /// Detected from the host when --platform is not given
    #[arg(long, global = true)]
    pub platform_version: Option<String>,

    /// Person document to use instead of the current login name
    #[arg(long, global = true)]
    pub person: Option<String>,

    /// Person document to use when the requested one does not exist
    #[arg(long, global = true)]
    pub fallback_person: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved configuration for this machine
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Write kitchenplan-attributes.json and solo.rb
    Generate,

    /// Generate files, fetch cookbooks and run Chef
    ///
    /// Examples:
    ///   kitchenplan run                      # Full run with chef-solo
    ///   kitchenplan run --dry-run            # Print the commands only
    ///   kitchenplan run --update-cookbooks   # Refresh vendored cookbooks first
    Run {
        /// Update cookbooks even if they are already present
        #[arg(long)]
        update_cookbooks: bool,

        /// Print commands instead of executing them
        #[arg(long)]
        dry_run: bool,

        /// Use chef-client in local mode instead of chef-solo
        #[arg(long)]
        chef_client: bool,
    },

    /// List supported platforms and their aliases
    Platforms,
}
