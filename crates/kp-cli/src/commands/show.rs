//! Show the resolved configuration

use colored::Colorize;
use serde_json::json;

use crate::context::RunContext;
use crate::error::Result;

/// Run the show command
pub fn run_show(ctx: &RunContext, json: bool) -> Result<()> {
    let resolved = ctx.resolve()?;
    let registry = ctx.resolvers();
    let resolver = registry.select(&ctx.probe_context()).map(|r| r.name().to_string());

    if json {
        let output = json!({
            "platform": resolved.platform,
            "resolver": resolver,
            "person": resolved.person,
            "fell_back": resolved.fell_back,
            "groups": resolved.groups,
            "recipes": resolved.config.recipes,
            "attributes": resolved.config.attributes,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{:<12} {} ({})",
        "Platform:".bold(),
        resolved.platform.as_str().cyan(),
        ctx.adapter.name
    );
    match &resolver {
        Some(name) => println!("{:<12} {}", "Resolver:".bold(), name.green()),
        None => println!("{:<12} {}", "Resolver:".bold(), "none".yellow()),
    }
    let person_note = if resolved.fell_back { " (fallback)" } else { "" };
    println!(
        "{:<12} {}{}",
        "Person:".bold(),
        resolved.person.green(),
        person_note.dimmed()
    );
    if resolved.groups.is_empty() {
        println!("{:<12} {}", "Groups:".bold(), "none".dimmed());
    } else {
        println!("{:<12} {}", "Groups:".bold(), resolved.groups.join(", "));
    }

    println!();
    println!("{}", "Recipes".bold());
    if resolved.config.recipes.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for recipe in &resolved.config.recipes {
        println!("  - {recipe}");
    }

    println!();
    println!("{}", "Attributes".bold());
    println!(
        "{}",
        serde_json::to_string_pretty(&resolved.config.attributes_value())?
    );

    Ok(())
}
