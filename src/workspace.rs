//! Ephemeral working directories for cloned repositories
//!
//! A [`Workspace`] owns a freshly created, uniquely named directory under the
//! system temp root. The directory is removed when the handle is dropped, on
//! success and on error paths alike, unless it was provisioned with `keep`.

use crate::constants;
use crate::utils::sanitize_path_component;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scoped temp directory holding one working copy
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    /// `None` once the directory has been detached from cleanup
    guard: Option<TempDir>,
}

impl Workspace {
    /// Provision a new workspace under the system temp root
    pub fn provision(label: &str, keep: bool) -> Result<Self> {
        Self::provision_in(&std::env::temp_dir(), label, keep)
    }

    /// Provision a new workspace under `root`
    pub fn provision_in(root: &Path, label: &str, keep: bool) -> Result<Self> {
        let prefix = Self::prefix_for(label);

        let dir = tempfile::Builder::new()
            .prefix(&prefix)
            .tempdir_in(root)
            .with_context(|| format!("Failed to create workspace in {}", root.display()))?;

        let path = dir.path().to_path_buf();
        let guard = if keep {
            let _ = dir.keep();
            None
        } else {
            Some(dir)
        };

        Ok(Self { path, guard })
    }

    fn prefix_for(label: &str) -> String {
        let label = sanitize_path_component(label);
        if label.is_empty() {
            format!("{}-", constants::workspace::DIR_PREFIX)
        } else {
            format!("{}-{}-", constants::workspace::DIR_PREFIX, label)
        }
    }

    /// Absolute path of the workspace directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory survives this handle
    pub fn is_kept(&self) -> bool {
        self.guard.is_none()
    }

    /// Detach the directory from cleanup and return its path
    pub fn into_kept_path(mut self) -> PathBuf {
        if let Some(dir) = self.guard.take() {
            let _ = dir.keep();
        }
        self.path.clone()
    }

    /// Remove the directory now, reporting failures instead of ignoring them
    ///
    /// A kept workspace is left alone.
    pub fn close(mut self) -> Result<()> {
        match self.guard.take() {
            Some(dir) => dir
                .close()
                .with_context(|| format!("Failed to remove workspace {}", self.path.display())),
            None => Ok(()),
        }
    }
}
