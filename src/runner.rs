//! The clone → commit → push sequence for one session

use crate::git::{self, CommitSnapshot, Session};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// What a completed run did
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub remote_url: String,
    pub workdir: PathBuf,
    /// Remote HEAD before the run, absent for an empty remote
    pub cloned: Option<CommitSnapshot>,
    pub committed: CommitSnapshot,
    pub workspace_kept: bool,
}

/// Runs the three steps in order and stops at the first failure
pub struct WorkflowRunner<'a> {
    session: &'a Session,
}

impl<'a> WorkflowRunner<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Clone, commit `message`, push. Nothing is retried or rolled back.
    pub fn run(&self, message: &str) -> Result<RunReport> {
        let cloned = git::clone_repository(self.session)?;
        let committed = git::commit_file(self.session, message)?;
        git::push_branch(self.session)?;

        Ok(RunReport {
            remote_url: self.session.remote_url.clone(),
            workdir: self.session.workdir.clone(),
            cloned,
            committed,
            workspace_kept: false,
        })
    }
}
