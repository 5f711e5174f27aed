//! Init command implementation

use super::{Command, CommandContext};
use anyhow::Result;
use colored::*;
use std::path::Path;

/// Init command for writing a starter configuration file
pub struct InitCommand {
    pub output: String,
    pub overwrite: bool,
}

impl Command for InitCommand {
    fn execute(&self, context: &CommandContext) -> Result<()> {
        if Path::new(&self.output).exists() && !self.overwrite {
            return Err(anyhow::anyhow!(
                "Output file '{}' already exists. Use --overwrite to replace it.",
                self.output
            ));
        }

        context.settings.save(&self.output)?;

        println!(
            "{}",
            format!("Configuration saved to '{}'", self.output).green()
        );
        println!(
            "Export the access token as {} before running 'gitploy run'.",
            context.settings.token_env.bold()
        );

        Ok(())
    }
}
