//! Kitchenplan CLI
//!
//! Resolves layered workstation configuration and drives Chef with it.

mod cli;
mod commands;
mod context;
mod error;
mod executor;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::RunOptions;
use context::RunContext;
use error::Result;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command.clone() else {
        println!("{} Workstation provisioning with Chef", "kitchenplan".green().bold());
        println!();
        println!("Run {} for available commands.", "kitchenplan --help".cyan());
        return Ok(());
    };

    if command == Commands::Platforms {
        return commands::run_platforms();
    }

    let ctx = RunContext::from_cli(&cli)?;
    tracing::debug!(config_dir = ?ctx.config_dir, person = %ctx.person.identity, "Starting");
    execute_command(&ctx, command)
}

fn execute_command(ctx: &RunContext, command: Commands) -> Result<()> {
    match command {
        Commands::Show { json } => commands::run_show(ctx, json),
        Commands::Generate => commands::run_generate(ctx),
        Commands::Run {
            update_cookbooks,
            dry_run,
            chef_client,
        } => commands::run_run(
            ctx,
            RunOptions {
                update_cookbooks,
                dry_run,
                chef_client,
            },
        ),
        Commands::Platforms => commands::run_platforms(),
    }
}
