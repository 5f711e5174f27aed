//! Settings and credential validation
//!
//! All checks run before the workspace is provisioned and before any network
//! activity. Problems are collected rather than reported one at a time so a
//! broken config file can be fixed in a single pass.

use super::Settings;
use crate::constants;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Remote URL is empty
    EmptyRemoteUrl,
    /// Remote URL is not an HTTP(S) endpoint
    InvalidRemoteUrl(String),
    /// Token environment variable name is empty
    EmptyTokenEnv,
    /// Basic-auth username is empty
    EmptyUsername,
    /// Author display name is empty
    EmptyAuthorName,
    /// Author email is empty
    EmptyAuthorEmail,
    /// Author email has no '@'
    InvalidAuthorEmail(String),
    /// Target file name is empty
    EmptyFileName,
    /// Target file name escapes the work tree or touches git internals
    InvalidFileName(String),
    /// Token environment variable is unset or empty
    MissingToken(String),
    /// Token environment variable holds bytes that are not UTF-8
    TokenNotUnicode(String),
    /// Token is shorter than the sanity-check minimum
    TokenTooShort {
        var: String,
        min: usize,
        actual: usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyRemoteUrl => write!(f, "Remote URL cannot be empty"),
            ValidationError::InvalidRemoteUrl(url) => {
                write!(f, "Remote URL must be an http(s) endpoint: '{}'", url)
            }
            ValidationError::EmptyTokenEnv => {
                write!(f, "Token environment variable name cannot be empty")
            }
            ValidationError::EmptyUsername => write!(f, "Username cannot be empty"),
            ValidationError::EmptyAuthorName => write!(f, "Author name cannot be empty"),
            ValidationError::EmptyAuthorEmail => write!(f, "Author email cannot be empty"),
            ValidationError::InvalidAuthorEmail(email) => {
                write!(f, "Author email is not an email address: '{}'", email)
            }
            ValidationError::EmptyFileName => write!(f, "File name cannot be empty"),
            ValidationError::InvalidFileName(name) => {
                write!(f, "File name must be a plain name inside the work tree: '{}'", name)
            }
            ValidationError::MissingToken(var) => {
                write!(f, "Access token not found in environment variable {}", var)
            }
            ValidationError::TokenNotUnicode(var) => {
                write!(f, "Access token in environment variable {} is not valid UTF-8", var)
            }
            ValidationError::TokenTooShort { var, min, actual } => write!(
                f,
                "Access token in {} is too short ({} characters, expected at least {})",
                var, actual, min
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a complete settings value
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.remote_url.trim().is_empty() {
        errors.push(ValidationError::EmptyRemoteUrl);
    } else if !is_valid_remote_url(&settings.remote_url) {
        errors.push(ValidationError::InvalidRemoteUrl(settings.remote_url.clone()));
    }

    if settings.token_env.trim().is_empty() {
        errors.push(ValidationError::EmptyTokenEnv);
    }

    if settings.username.is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }

    if settings.author.name.trim().is_empty() {
        errors.push(ValidationError::EmptyAuthorName);
    }

    if settings.author.email.trim().is_empty() {
        errors.push(ValidationError::EmptyAuthorEmail);
    } else if !settings.author.email.contains('@') {
        errors.push(ValidationError::InvalidAuthorEmail(
            settings.author.email.clone(),
        ));
    }

    if let Err(error) = validate_file_name(&settings.file_name) {
        errors.push(error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the name of the file rewritten by each commit
///
/// The name must be a single path component and must not point into `.git`.
pub fn validate_file_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyFileName);
    }

    let escapes = name.contains('/')
        || name.contains('\\')
        || name == "."
        || name == ".."
        || name.eq_ignore_ascii_case(".git");

    if escapes {
        Err(ValidationError::InvalidFileName(name.to_string()))
    } else {
        Ok(())
    }
}

/// Validates a raw token value read from `var`
///
/// The minimum length is a guard against obviously missing configuration, not
/// an authorization check: the remote is the only judge of a token.
pub fn validate_token(var: &str, token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::MissingToken(var.to_string()));
    }

    let actual = token.chars().count();
    if actual < constants::auth::MIN_TOKEN_LENGTH {
        return Err(ValidationError::TokenTooShort {
            var: var.to_string(),
            min: constants::auth::MIN_TOKEN_LENGTH,
            actual,
        });
    }

    Ok(())
}

fn is_valid_remote_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Converts validation errors to a user-friendly anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
