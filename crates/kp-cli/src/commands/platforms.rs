//! List supported platforms

use colored::Colorize;
use kp_platform::PlatformRegistry;

use crate::error::Result;

/// Run the platforms command
pub fn run_platforms() -> Result<()> {
    let registry = PlatformRegistry::with_builtins();

    println!("{}", "Supported Platforms".bold());
    println!();

    for id in registry.list() {
        let Some(adapter) = registry.get(id) else {
            continue;
        };
        println!("  {:<10} {}", id.green(), adapter.name);

        let aliases = registry.aliases_for(id);
        if !aliases.is_empty() {
            println!("  {:<10} {} {}", "", "aliases:".dimmed(), aliases.join(", "));
        }
        if let Some(min) = &adapter.min_version {
            println!("  {:<10} {} {}", "", "minimum version:".dimmed(), min);
        }
    }

    println!();
    println!(
        "{} {} platforms. Use {} to override detection.",
        "Total:".dimmed(),
        registry.len(),
        "--platform <family>".cyan()
    );
    Ok(())
}
