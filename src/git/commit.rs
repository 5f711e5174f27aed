//! Writing the tracked file and committing it

use super::{CommitSnapshot, Session, status};
use crate::config::Author;
use anyhow::{Context, Result};
use git2::{Commit, ErrorCode, Oid, Repository, Signature};
use std::path::Path;

/// Overwrite the tracked file with `message`, stage it and commit it
///
/// The author and committer are the session's fixed identity, never the git
/// configuration of the machine. A failure after the file was written leaves
/// the file on disk.
pub fn commit_file(session: &Session, message: &str) -> Result<CommitSnapshot> {
    let logger = session.logger();
    let repo = session.open()?;

    let file_path = session.file_path();
    logger.echo(&format!("echo {:?} > {}", message, session.file_name));
    std::fs::write(&file_path, message)
        .with_context(|| format!("Failed to write file {}", file_path.display()))?;

    logger.echo(&format!("git add {}", session.file_name));
    stage_file(&repo, &session.file_name)
        .with_context(|| format!("Failed to stage {}", session.file_name))?;

    logger.echo("git status --porcelain");
    let status = status::porcelain_status(&repo).context("Failed to read worktree status")?;
    logger.block(&status.join("\n"));

    logger.echo(&format!("git commit -m {:?}", message));
    let oid = create_commit(&repo, &session.author, message).context("Failed to create commit")?;

    logger.echo("git show -s");
    let commit = repo
        .find_commit(oid)
        .with_context(|| format!("Failed to read back commit {}", oid))?;
    let snapshot = CommitSnapshot::from_commit(&commit);
    logger.block(&snapshot.to_string());

    Ok(snapshot)
}

fn stage_file(repo: &Repository, file_name: &str) -> Result<(), git2::Error> {
    let mut index = repo.index()?;
    index.add_path(Path::new(file_name))?;
    index.write()
}

/// Commit the current index on top of HEAD, or as a root commit on an unborn branch
fn create_commit(repo: &Repository, author: &Author, message: &str) -> Result<Oid, git2::Error> {
    let signature = Signature::now(&author.name, &author.email)?;

    let tree_id = repo.index()?.write_tree()?;
    let tree = repo.find_tree(tree_id)?;

    let parent = head_commit(repo)?;
    let parents: Vec<&Commit<'_>> = parent.iter().collect();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
}

fn head_commit(repo: &Repository) -> Result<Option<Commit<'_>>, git2::Error> {
    match repo.head() {
        Ok(head) => head.peel_to_commit().map(Some),
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
