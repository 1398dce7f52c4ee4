//! Chef artifact writers

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use kp_core::config::ResolvedConfig;
use kp_platform::{ATTRIBUTES_FILE, SOLO_CONFIG_FILE};

use crate::context::RunContext;
use crate::error::Result;

/// Directory cookbooks are vendored into
pub const COOKBOOKS_DIR: &str = "cookbooks";

/// Paths written by [`write_artifacts`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub attributes: PathBuf,
    pub solo_config: PathBuf,
}

/// `solo.rb` pointing Chef at `<config_dir>/cookbooks`.
pub fn solo_config(config_dir: &Path) -> String {
    let cookbooks = config_dir.join(COOKBOOKS_DIR);
    // Ruby string literal, forward slashes on every platform
    let cookbooks = cookbooks.to_string_lossy().replace('\\', "/");
    format!("cookbook_path      [ \"{cookbooks}\" ]\n")
}

/// Write the attribute JSON and `solo.rb` into `config_dir`.
pub fn write_artifacts(config_dir: &Path, config: &ResolvedConfig) -> Result<Artifacts> {
    let attributes = config_dir.join(ATTRIBUTES_FILE);
    let json = serde_json::to_string_pretty(&config.attributes_value())?;
    fs::write(&attributes, json)?;
    tracing::debug!(path = ?attributes, "Wrote attributes");

    let solo_config_path = config_dir.join(SOLO_CONFIG_FILE);
    fs::write(&solo_config_path, solo_config(config_dir))?;
    tracing::debug!(path = ?solo_config_path, "Wrote solo config");

    Ok(Artifacts {
        attributes,
        solo_config: solo_config_path,
    })
}

/// Run the generate command
pub fn run_generate(ctx: &RunContext) -> Result<()> {
    let resolved = ctx.resolve()?;
    let artifacts = write_artifacts(ctx.config_dir(), &resolved.config)?;

    println!("{} {}", "Wrote".green().bold(), artifacts.attributes.display());
    println!("{} {}", "Wrote".green().bold(), artifacts.solo_config.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    #[test]
    fn test_solo_config_format() {
        let content = solo_config(Path::new("/opt/kitchenplan"));
        assert_eq!(content, "cookbook_path      [ \"/opt/kitchenplan/cookbooks\" ]\n");
    }

    #[test]
    fn test_write_artifacts() {
        let temp = TempDir::new().unwrap();
        let mut config = ResolvedConfig::default();
        config.recipes.push("git".to_string());
        config
            .attributes
            .insert("git".to_string(), json!({ "user": "roderik" }));

        let artifacts = write_artifacts(temp.path(), &config).unwrap();

        let written: Value =
            serde_json::from_str(&fs::read_to_string(&artifacts.attributes).unwrap()).unwrap();
        assert_eq!(written, json!({ "git": { "user": "roderik" } }));
        assert!(
            fs::read_to_string(&artifacts.solo_config)
                .unwrap()
                .starts_with("cookbook_path")
        );
    }
}
