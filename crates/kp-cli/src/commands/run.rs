//! Full provisioning run: artifacts, cookbooks, Chef

use colored::Colorize;

use kp_platform::ChefInvocation;
use kp_resolver::require_resolver;

use super::generate::{COOKBOOKS_DIR, write_artifacts};
use crate::context::RunContext;
use crate::error::Result;
use crate::executor::Executor;

/// Flags of the run command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub update_cookbooks: bool,
    pub dry_run: bool,
    pub chef_client: bool,
}

/// Run the run command
///
/// The platform version is checked first. Cookbooks are fetched when
/// `cookbooks/` is missing and updated when requested. Only those steps
/// require a resolver.
pub fn run_run(ctx: &RunContext, options: RunOptions) -> Result<()> {
    ctx.check_platform_version()?;

    let resolved = ctx.resolve()?;
    write_artifacts(ctx.config_dir(), &resolved.config)?;

    let registry = ctx.resolvers();
    let selected = registry.select(&ctx.probe_context());
    let executor = Executor::new(ctx.config_dir(), options.dry_run);

    if !ctx.config_dir().join(COOKBOOKS_DIR).is_dir() {
        let resolver = require_resolver(selected, &registry)?;
        println!("{} cookbooks with {}", "Fetching".bold(), resolver.name());
        executor.run(&resolver.fetch_command(ctx.verbose))?;
    }

    if options.update_cookbooks {
        let resolver = require_resolver(selected, &registry)?;
        println!("{} cookbooks with {}", "Updating".bold(), resolver.name());
        executor.run(&resolver.update_command(ctx.verbose))?;
    }

    if resolved.config.recipes.is_empty() {
        println!("{} No recipes to run", "warning:".yellow().bold());
        return Ok(());
    }

    let invocation = ChefInvocation::solo(resolved.config.recipes)
        .with_solo(!options.chef_client)
        .with_log_level(ctx.chef_log_level());
    let chef = ctx.adapter.chef_command(&invocation);
    executor.run(&ctx.adapter.run_privileged(&chef))?;

    if !options.dry_run {
        println!("{} Chef run finished", "Done.".green().bold());
    }
    Ok(())
}
