//! Command implementations

pub mod base;
pub mod init;
pub mod run;
pub mod validators;

pub use base::{Command, CommandContext};
pub use init::InitCommand;
pub use run::RunCommand;
