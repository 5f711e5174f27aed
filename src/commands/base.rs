//! Base types and traits for the command pattern

use crate::config::Settings;
use anyhow::Result;

/// Context passed to all commands containing the resolved settings
#[derive(Clone, Debug)]
pub struct CommandContext {
    /// Settings after file loading and CLI overrides
    pub settings: Settings,
}

/// Trait that all commands must implement
pub trait Command {
    /// Execute the command with the given context
    fn execute(&self, context: &CommandContext) -> Result<()>;
}
