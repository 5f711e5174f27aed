//! Working tree status in `git status --porcelain` form

use git2::{Repository, Status, StatusOptions};

/// One porcelain status line per changed path
///
/// Purely diagnostic: the workflow logs it and never branches on it.
pub fn porcelain_status(repo: &Repository) -> Result<Vec<String>, git2::Error> {
    let mut options = StatusOptions::new();
    options.include_untracked(true).recurse_untracked_dirs(true);

    let statuses = repo.statuses(Some(&mut options))?;

    let lines = statuses
        .iter()
        .map(|entry| {
            let path = String::from_utf8_lossy(entry.path_bytes());
            format!("{} {}", status_code(entry.status()), path)
        })
        .collect();

    Ok(lines)
}

/// Two-letter XY code: index state, then worktree state
fn status_code(status: Status) -> String {
    if status.contains(Status::WT_NEW) && !status.intersects(index_flags()) {
        return "??".to_string();
    }

    let index = if status.contains(Status::INDEX_NEW) {
        'A'
    } else if status.contains(Status::INDEX_MODIFIED) {
        'M'
    } else if status.contains(Status::INDEX_DELETED) {
        'D'
    } else if status.contains(Status::INDEX_RENAMED) {
        'R'
    } else if status.contains(Status::INDEX_TYPECHANGE) {
        'T'
    } else {
        ' '
    };

    let worktree = if status.contains(Status::WT_MODIFIED) {
        'M'
    } else if status.contains(Status::WT_DELETED) {
        'D'
    } else if status.contains(Status::WT_RENAMED) {
        'R'
    } else if status.contains(Status::WT_TYPECHANGE) {
        'T'
    } else {
        ' '
    };

    format!("{}{}", index, worktree)
}

fn index_flags() -> Status {
    Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_DELETED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE
}
