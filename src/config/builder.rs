//! Settings builder utilities

use super::{Author, Settings};

/// Builder for assembling settings from defaults plus overrides
#[derive(Default)]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    /// Start from the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from already loaded settings
    pub fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Set the remote repository URL
    pub fn with_remote_url(mut self, url: String) -> Self {
        self.settings.remote_url = url;
        self
    }

    /// Set the environment variable the token is read from
    pub fn with_token_env(mut self, var: String) -> Self {
        self.settings.token_env = var;
        self
    }

    /// Set the placeholder username
    pub fn with_username(mut self, username: String) -> Self {
        self.settings.username = username;
        self
    }

    /// Set the commit author
    pub fn with_author(mut self, name: String, email: String) -> Self {
        self.settings.author = Author { name, email };
        self
    }

    /// Set the file rewritten by each commit
    pub fn with_file_name(mut self, file_name: String) -> Self {
        self.settings.file_name = file_name;
        self
    }

    /// Set the prefix of the generated commit message
    pub fn with_message_prefix(mut self, prefix: String) -> Self {
        self.settings.message_prefix = prefix;
        self
    }

    /// Keep the workspace on disk after the run
    pub fn keep_workspace(mut self, keep: bool) -> Self {
        self.settings.keep_workspace = keep;
        self
    }

    /// Build the settings
    pub fn build(self) -> Settings {
        self.settings
    }
}
