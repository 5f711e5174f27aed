//! Cloning the remote into the session's working directory

use super::{CommitSnapshot, Session, auth};
use anyhow::{Context, Result};
use git2::{ErrorCode, FetchOptions, Repository, build::RepoBuilder};
use std::path::Path;

/// Clone the remote's default branch into the session's working directory
///
/// Returns the commit HEAD points to after the clone, or `None` when the
/// remote has no commits yet. The snapshot is informational only.
pub fn clone_repository(session: &Session) -> Result<Option<CommitSnapshot>> {
    let logger = session.logger();

    ensure_empty_directory(session.workdir())?;

    logger.echo(&format!(
        "git clone {} {}",
        session.remote_url,
        session.workdir.display()
    ));

    let mut fetch_options = FetchOptions::new();
    fetch_options.remote_callbacks(auth::fetch_callbacks(session));

    let repo = RepoBuilder::new()
        .fetch_options(fetch_options)
        .clone(&session.remote_url, &session.workdir)
        .with_context(|| format!("Failed to clone repository {}", session.remote_url))?;

    let snapshot = head_snapshot(&repo)
        .with_context(|| format!("Failed to clone repository {}", session.remote_url))?;

    match &snapshot {
        Some(snapshot) => logger.block(&snapshot.to_string()),
        None => logger.warn("Remote repository has no commits yet"),
    }

    logger.success("Successfully cloned");
    Ok(snapshot)
}

/// Snapshot of the commit HEAD resolves to, `None` on an unborn branch
pub(crate) fn head_snapshot(repo: &Repository) -> Result<Option<CommitSnapshot>, git2::Error> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let commit = head.peel_to_commit()?;
    Ok(Some(CommitSnapshot::from_commit(&commit)))
}

fn ensure_empty_directory(path: &Path) -> Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Working directory does not exist: {}", path.display());
    }

    let mut entries = std::fs::read_dir(path)
        .with_context(|| format!("Failed to read working directory {}", path.display()))?;

    if entries.next().is_some() {
        anyhow::bail!("Working directory is not empty: {}", path.display());
    }

    Ok(())
}
