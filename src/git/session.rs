//! The repository session shared by clone, commit and push

use super::Logger;
use crate::config::{Author, Credential, Settings};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// One remote repository, one local working copy, one credential
///
/// Built once per run and handed by reference to each step. It is never
/// persisted or reused across runs.
#[derive(Debug)]
pub struct Session {
    pub remote_url: String,
    pub workdir: PathBuf,
    pub username: String,
    pub credential: Credential,
    pub author: Author,
    pub file_name: String,
    logger: Logger,
}

impl Session {
    pub fn new(settings: &Settings, workdir: PathBuf, credential: Credential) -> Self {
        Self {
            remote_url: settings.remote_url.clone(),
            workdir,
            username: settings.username.clone(),
            credential,
            author: settings.author.clone(),
            file_name: settings.file_name.clone(),
            logger: Logger::new(settings.repository_name()),
        }
    }

    /// Replace the console logger, e.g. to keep stdout free for a report
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Path of the file rewritten by each commit
    pub fn file_path(&self) -> PathBuf {
        self.workdir.join(&self.file_name)
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Open the working copy created by a previous clone
    pub(crate) fn open(&self) -> Result<git2::Repository> {
        git2::Repository::open(&self.workdir)
            .with_context(|| format!("Failed to open repository in {}", self.workdir.display()))
    }
}
