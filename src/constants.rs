//! Central constants for the gitploy application

/// Default values for Git operations
pub mod git {
    /// Remote repository the workflow targets when nothing else is configured
    pub const DEFAULT_REMOTE_URL: &str = "https://github.com/maikdotfi/gitploy-dev";

    /// Remote name used when the current branch has no upstream configured
    pub const DEFAULT_REMOTE: &str = "origin";

    /// Placeholder username for token authentication. Any non-empty value works.
    pub const DEFAULT_USERNAME: &str = "gitploy";

    /// Name of the file rewritten by every commit
    pub const DEFAULT_FILE_NAME: &str = "example-git-file";

    /// Commit author display name
    pub const DEFAULT_AUTHOR_NAME: &str = "Git Ploy";

    /// Commit author email
    pub const DEFAULT_AUTHOR_EMAIL: &str = "gitploy@maik.fi";

    /// Prefix of the generated commit message
    pub const DEFAULT_MESSAGE_PREFIX: &str = "Wow look at this!";

    /// Timestamp appended to the generated commit message
    pub const MESSAGE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Default values for authentication
pub mod auth {
    /// Environment variable holding the access token
    pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_PAT";

    /// Tokens shorter than this are treated as missing configuration.
    /// This is a sanity check only, not a validity check.
    pub const MIN_TOKEN_LENGTH: usize = 20;
}

/// Default values for configuration
pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONFIG_FILE: &str = "gitploy.yaml";
}

/// Default values for the ephemeral workspace
pub mod workspace {
    /// Prefix of every provisioned temp directory
    pub const DIR_PREFIX: &str = "gitploy";
}
