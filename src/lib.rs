//! gitploy - clone a repository, commit a timestamped file, push it back

pub mod commands;
pub mod config;
pub mod constants;
pub mod git;
pub mod runner;
pub mod utils;
pub mod workspace;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::{Credential, Settings};
pub use git::{CommitSnapshot, Session};
pub use runner::{RunReport, WorkflowRunner};
pub use workspace::Workspace;
