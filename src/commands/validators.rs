//! Command argument validation utilities
//!
//! Checks on CLI arguments that go beyond what clap parsing enforces. They
//! run before settings are resolved.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn reject_blank(argument: &str, value: &Option<String>, reason: &str) -> Result<()> {
    if let Some(v) = value
        && v.trim().is_empty()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: argument.to_string(),
                value: v.clone(),
                reason: reason.to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate commit message
///
/// Ensures commit messages are not empty when provided
pub fn validate_commit_message(message: &Option<String>) -> Result<()> {
    reject_blank(
        "commit message",
        message,
        "commit message cannot be empty or whitespace only",
    )
}

/// Validate remote URL override
///
/// Format checks happen with the rest of the settings; this only rejects blanks
pub fn validate_remote_url(url: &Option<String>) -> Result<()> {
    reject_blank("url", url, "remote URL cannot be empty or whitespace only")
}

/// Validate config file path
pub fn validate_config_path(path: &Option<String>) -> Result<()> {
    reject_blank("config", path, "config path cannot be empty or whitespace only")
}
