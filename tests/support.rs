//! Common test support utilities and fixtures
//!
//! Remotes are local bare repositories, which libgit2 clones from and pushes
//! to through its local transport, so no network access is needed.

#![allow(dead_code)]

use git2::{Repository, Signature};
use gitploy::config::{Credential, Settings, SettingsBuilder};
use gitploy::git::Session;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-token-0123456789abcdef";

/// Result of running the CLI binary
#[derive(Debug)]
pub struct CliOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

/// A bare repository seeded with one commit on `main`
pub struct RemoteFixture {
    pub root: TempDir,
    pub path: PathBuf,
}

impl Default for RemoteFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteFixture {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory");
        let path = root.path().join("remote.git");
        let repo = Repository::init_bare(&path).expect("Failed to init bare repository");

        {
            let blob = repo
                .blob(b"# Test Repository")
                .expect("Failed to write blob");
            let mut builder = repo.treebuilder(None).expect("Failed to create tree builder");
            builder
                .insert("README.md", blob, 0o100644)
                .expect("Failed to insert tree entry");
            let tree_id = builder.write().expect("Failed to write tree");
            let tree = repo.find_tree(tree_id).expect("Failed to find tree");

            let signature =
                Signature::now("Test User", "test@example.com").expect("Failed to create signature");
            repo.commit(
                Some("refs/heads/main"),
                &signature,
                &signature,
                "Initial commit",
                &tree,
                &[],
            )
            .expect("Failed to create initial commit");
        }

        repo.set_head("refs/heads/main")
            .expect("Failed to point HEAD at main");

        Self { root, path }
    }

    /// Location to clone from
    pub fn url(&self) -> String {
        self.path.to_string_lossy().to_string()
    }

    pub fn open(&self) -> Repository {
        Repository::open_bare(&self.path).expect("Failed to open remote")
    }

    /// Object id `main` currently points to on the remote
    pub fn main_id(&self) -> git2::Oid {
        self.open()
            .refname_to_id("refs/heads/main")
            .expect("Remote has no main branch")
    }

    /// Number of commits reachable from `main` on the remote
    pub fn commit_count(&self) -> usize {
        let repo = self.open();
        let mut walk = repo.revwalk().expect("Failed to create revwalk");
        walk.push(self.main_id()).expect("Failed to push main to revwalk");
        walk.count()
    }

    /// Content of `file_name` in the tree of the remote's `main`
    pub fn file_content(&self, file_name: &str) -> Option<String> {
        let repo = self.open();
        let commit = repo.find_commit(self.main_id()).ok()?;
        let tree = commit.tree().ok()?;
        let entry = tree.get_name(file_name)?;
        let blob = repo.find_blob(entry.id()).ok()?;
        Some(String::from_utf8_lossy(blob.content()).into_owned())
    }
}

/// Settings pointing at a local remote, otherwise defaults
pub fn settings_for(url: &str) -> Settings {
    SettingsBuilder::new().with_remote_url(url.to_string()).build()
}

pub fn test_credential() -> Credential {
    Credential::new("TEST_TOKEN", TEST_TOKEN.to_string()).expect("Test token should be valid")
}

pub fn session_for(url: &str, workdir: &Path) -> Session {
    Session::new(&settings_for(url), workdir.to_path_buf(), test_credential())
}

/// Run the gitploy binary with given arguments and environment
pub fn run_cli(args: &[&str], cwd: &Path, envs: &[(&str, &str)], remove: &[&str]) -> CliOutput {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gitploy"));
    cmd.args(args).current_dir(cwd);

    for (key, value) in envs {
        cmd.env(key, value);
    }
    for key in remove {
        cmd.env_remove(key);
    }

    let output = cmd.output().expect("Failed to execute gitploy");

    CliOutput {
        status: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
