//! Git operations over libgit2
//!
//! This module is organized into sub-modules, one per workflow step:
//!
//! ## Sub-modules
//!
//! - [`clone`]: clone the remote into an empty working directory
//! - [`commit`]: rewrite the tracked file, stage it and commit it
//! - [`push`]: push the current branch to its upstream
//! - [`session`]: the remote URL, working directory and credential shared by
//!   all three steps
//! - [`snapshot`]: commit details reported after clone and commit
//! - [`status`]: porcelain-style working tree status for diagnostics
//! - [`common`]: console `Logger`
//!
//! Remote operations authenticate through [`auth`], which answers credential
//! requests with the access token as an HTTP Basic password.

mod auth;
pub mod clone;
pub mod commit;
pub mod common;
pub mod push;
pub mod session;
pub mod snapshot;
pub mod status;

pub use clone::clone_repository;
pub use commit::commit_file;
pub use common::Logger;
pub use push::push_branch;
pub use session::Session;
pub use snapshot::CommitSnapshot;
pub use status::porcelain_status;
