//! CLI argument parsing and pre-flight integration tests

mod support;

use support::run_cli;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(&["--help"], cwd.path(), &[], &[]);

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("Commands:"));
    assert!(output.stdout.contains("run"));
    assert!(output.stdout.contains("init"));
}

#[test]
fn test_cli_invalid_subcommand() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(&["invalid-command"], cwd.path(), &[], &[]);

    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("unrecognized subcommand") || output.stderr.contains("invalid"));
}

#[test]
fn test_run_with_short_token_fails_before_provisioning() {
    let cwd = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let tmp_path = tmp.path().to_string_lossy().to_string();

    let output = run_cli(
        &["run"],
        cwd.path(),
        &[("GITHUB_PAT", "short"), ("TMPDIR", tmp_path.as_str())],
        &[],
    );

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("too short"));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_default_command_is_run() {
    let cwd = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let tmp_path = tmp.path().to_string_lossy().to_string();

    let output = run_cli(&[], cwd.path(), &[("TMPDIR", tmp_path.as_str())], &["GITHUB_PAT"]);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("GITHUB_PAT"));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn test_run_with_invalid_url() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(
        &["run", "--url", "ftp://example.com/repo.git"],
        cwd.path(),
        &[("GITHUB_PAT", "0123456789abcdefghijklmnop")],
        &[],
    );

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("http(s) endpoint"));
}

#[test]
fn test_run_with_blank_message() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(&["run", "--message", "  "], cwd.path(), &[], &[]);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("commit message cannot be empty"));
}

#[test]
fn test_run_with_missing_config() {
    let cwd = TempDir::new().unwrap();
    let output = run_cli(&["run", "--config", "nonexistent.yaml"], cwd.path(), &[], &[]);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("Failed to read config file"));
}

#[test]
fn test_run_reads_token_env_from_default_config() {
    let cwd = TempDir::new().unwrap();
    std::fs::write(cwd.path().join("gitploy.yaml"), "token_env: CUSTOM_DEPLOY_TOKEN\n").unwrap();

    let output = run_cli(&["run"], cwd.path(), &[], &["CUSTOM_DEPLOY_TOKEN"]);

    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("CUSTOM_DEPLOY_TOKEN"));
}

#[test]
fn test_init_then_refuse_overwrite() {
    let cwd = TempDir::new().unwrap();

    let output = run_cli(&["init"], cwd.path(), &[], &[]);
    assert_eq!(output.status, 0);
    let content = std::fs::read_to_string(cwd.path().join("gitploy.yaml")).unwrap();
    assert!(content.contains("remote_url: https://github.com/maikdotfi/gitploy-dev"));

    let output = run_cli(&["init"], cwd.path(), &[], &[]);
    assert_eq!(output.status, 1);
    assert!(output.stderr.contains("already exists"));

    let output = run_cli(&["init", "--overwrite"], cwd.path(), &[], &[]);
    assert_eq!(output.status, 0);
}

/// URL of a local port nothing listens on, so the clone fails fast
fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/owner/repo.git")
}

#[test]
fn test_run_json_keeps_progress_off_stdout() {
    let cwd = TempDir::new().unwrap();
    let tmp = TempDir::new().unwrap();
    let tmp_path = tmp.path().to_string_lossy().to_string();
    let url = unreachable_url();
    let envs = [
        ("GITHUB_PAT", "0123456789abcdefghijklmnop"),
        ("TMPDIR", tmp_path.as_str()),
    ];

    let output = run_cli(&["run", "--url", &url, "--json"], cwd.path(), &envs, &[]);
    assert_eq!(output.status, 1);
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("git clone"));
    assert!(output.stderr.contains("Failed to clone repository"));

    let output = run_cli(&["run", "--url", &url], cwd.path(), &envs, &[]);
    assert_eq!(output.status, 1);
    assert!(output.stdout.contains("git clone"));
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}
