//! Runs resolver and Chef command lines through the platform shell

use colored::Colorize;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{CliError, Result};

/// Executes command strings in the config directory, or only prints them.
#[derive(Debug, Clone)]
pub struct Executor {
    dir: PathBuf,
    dry_run: bool,
}

impl Executor {
    pub fn new(dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            dir: dir.into(),
            dry_run,
        }
    }

    /// Run `command` and fail with [`CliError::CommandFailed`] on a
    /// non-zero exit.
    pub fn run(&self, command: &str) -> Result<()> {
        if self.dry_run {
            println!("{} {}", "would run:".dimmed(), command);
            return Ok(());
        }

        println!("{} {}", "running:".cyan().bold(), command);
        tracing::debug!(command, dir = ?self.dir, "Executing command");
        let status = shell(command).current_dir(&self.dir).status()?;

        if status.success() {
            Ok(())
        } else {
            Err(CliError::CommandFailed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
