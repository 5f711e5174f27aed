//! Pushing the current branch back to its upstream

use super::{Session, auth};
use crate::constants;
use anyhow::{Context, Result, anyhow};
use git2::{PushOptions, Repository};
use std::cell::RefCell;

/// Push the current branch to its upstream, without force
///
/// The upstream comes from branch configuration written by the clone. A
/// branch without one (a clone of an empty remote) is pushed to `origin`
/// under its own name. Rejections reported by the remote fail the push.
pub fn push_branch(session: &Session) -> Result<()> {
    let logger = session.logger();
    let repo = session.open()?;

    let target = PushTarget::resolve(&repo)
        .with_context(|| format!("Failed to push to {}", session.remote_url))?;

    logger.echo(&format!("git push {} {}", target.remote, target.refspec()));

    push_to(&repo, session, &target)
        .with_context(|| format!("Failed to push to {}", session.remote_url))?;

    logger.success("Successfully pushed");
    Ok(())
}

/// Where the current branch goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PushTarget {
    pub remote: String,
    pub local_ref: String,
    pub remote_ref: String,
}

impl PushTarget {
    pub(crate) fn resolve(repo: &Repository) -> Result<Self> {
        let head = repo.head().context("Repository has no current branch to push")?;
        if !head.is_branch() {
            anyhow::bail!("HEAD is detached, there is no branch to push");
        }

        let local_ref = head
            .name()
            .ok_or_else(|| anyhow!("Current branch name is not valid UTF-8"))?
            .to_string();

        let remote = repo
            .branch_upstream_remote(&local_ref)
            .ok()
            .and_then(|buf| buf.as_str().map(str::to_string))
            .unwrap_or_else(|| constants::git::DEFAULT_REMOTE.to_string());

        let remote_ref = repo
            .branch_upstream_merge(&local_ref)
            .ok()
            .and_then(|buf| buf.as_str().map(str::to_string))
            .unwrap_or_else(|| local_ref.clone());

        Ok(Self {
            remote,
            local_ref,
            remote_ref,
        })
    }

    pub(crate) fn refspec(&self) -> String {
        format!("{}:{}", self.local_ref, self.remote_ref)
    }
}

fn push_to(repo: &Repository, session: &Session, target: &PushTarget) -> Result<()> {
    let mut remote = repo
        .find_remote(&target.remote)
        .with_context(|| format!("Remote '{}' is not configured", target.remote))?;

    let rejected: RefCell<Vec<String>> = RefCell::new(Vec::new());

    let mut callbacks = auth::remote_callbacks(session);
    callbacks.push_update_reference(|refname, status| {
        if let Some(reason) = status {
            rejected
                .borrow_mut()
                .push(format!("{} rejected: {}", refname, reason));
        }
        Ok(())
    });

    let mut options = PushOptions::new();
    options.remote_callbacks(callbacks);

    remote.push(&[target.refspec().as_str()], Some(&mut options))?;

    let rejected = rejected.take();
    if !rejected.is_empty() {
        anyhow::bail!("{}", rejected.join("; "));
    }

    Ok(())
}
