//! Configuration file loading and saving

use super::validation;
use crate::constants;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity recorded as author and committer of every commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: constants::git::DEFAULT_AUTHOR_NAME.to_string(),
            email: constants::git::DEFAULT_AUTHOR_EMAIL.to_string(),
        }
    }
}

/// Everything a run needs apart from the token itself
///
/// Every field is optional in the YAML file; missing fields fall back to the
/// values in [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// HTTPS endpoint of the target repository
    pub remote_url: String,
    /// Environment variable the token is read from
    pub token_env: String,
    /// Placeholder username sent alongside the token
    pub username: String,
    pub author: Author,
    /// File rewritten with the commit message
    pub file_name: String,
    /// Prefix of the generated commit message
    pub message_prefix: String,
    /// Leave the temp clone on disk after the run
    pub keep_workspace: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remote_url: constants::git::DEFAULT_REMOTE_URL.to_string(),
            token_env: constants::auth::DEFAULT_TOKEN_ENV.to_string(),
            username: constants::git::DEFAULT_USERNAME.to_string(),
            author: Author::default(),
            file_name: constants::git::DEFAULT_FILE_NAME.to_string(),
            message_prefix: constants::git::DEFAULT_MESSAGE_PREFIX.to_string(),
            keep_workspace: false,
        }
    }
}

impl Settings {
    /// Load settings from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;

        // An empty document means "all defaults"
        let settings: Settings = if content.trim().is_empty() {
            Settings::default()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path))?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Resolve settings for a run
    ///
    /// An explicitly named file must exist. Without one, the default config
    /// file is read when present and built-in defaults are used otherwise.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(constants::config::DEFAULT_CONFIG_FILE).exists() => {
                Self::load(constants::config::DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Save settings to a file
    pub fn save(&self, path: &str) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;

        // Document marker for yamllint compliance
        let yaml_content = format!("---\n{}", yaml);

        std::fs::write(path, yaml_content)
            .with_context(|| format!("Failed to write config file {}", path))?;

        Ok(())
    }

    /// Validate every field
    pub fn validate(&self) -> Result<()> {
        validation::validate_settings(self).map_err(validation::validation_errors_to_anyhow)
    }

    /// Short repository name derived from the remote URL, used to label output
    pub fn repository_name(&self) -> String {
        repository_name_from_url(&self.remote_url)
    }

    /// Default commit message: the configured prefix plus a local timestamp
    pub fn default_message(&self) -> String {
        let now = chrono::Local::now();
        format!(
            "{} {}",
            self.message_prefix,
            now.format(constants::git::MESSAGE_TIMESTAMP_FORMAT)
        )
    }
}

/// Last path segment of a repository URL without the `.git` suffix
pub fn repository_name_from_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed
        .rsplit(['/', ':'])
        .next()
        .unwrap_or(trimmed);
    let name = last.strip_suffix(".git").unwrap_or(last);

    if name.is_empty() {
        "repository".to_string()
    } else {
        name.to_string()
    }
}
