//! CLI contract tests for the version-tracker binary
//!
//! Runs the built binary end to end: a missing package name or an
//! untracked manifest pattern exits 1; an absent package still writes an
//! empty history and exits 0; a successful run writes the nested JSON
//! report.

use git2::{Oid, Repository, Signature, Time};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn version_bin() -> &'static str {
    env!("CARGO_BIN_EXE_version-tracker")
}

fn init_repo() -> (TempDir, Repository) {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = Repository::init(dir.path()).expect("init repo");
    {
        let mut config = repo.config().expect("config");
        config.set_str("user.name", "Test User").expect("name");
        config
            .set_str("user.email", "test@example.com")
            .expect("email");
    }
    (dir, repo)
}

fn commit_files(repo: &Repository, files: &[(&str, &str)], message: &str, epoch: i64) -> Oid {
    let workdir = repo.workdir().expect("workdir");
    let mut index = repo.index().expect("index");
    for (path, content) in files {
        let full = workdir.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("mkdir");
        }
        std::fs::write(&full, content).expect("write");
        index.add_path(Path::new(path)).expect("add");
    }
    index.write().expect("index write");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");

    let sig =
        Signature::new("Test User", "test@example.com", &Time::new(epoch, 0)).expect("signature");
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("commit")
}

fn run_tracker(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(version_bin())
        .args(args)
        .output()
        .expect("run version-tracker");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn read_report(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).expect("read report")).expect("parse")
}

#[test]
fn missing_package_name_exits_one() {
    let output = Command::new(version_bin())
        .output()
        .expect("run version-tracker");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PACKAGE_NAME"));
}

#[test]
fn no_tracked_manifest_exits_one() {
    let (dir, repo) = init_repo();
    commit_files(&repo, &[("src/index.js", "code\n")], "init", 1_700_000_000);
    let out = tempfile::tempdir().expect("out dir");
    let output = out.path().join("output.json");

    let (code, _stdout, stderr) = run_tracker(&[
        "lodash",
        output.to_str().expect("output path"),
        "package.json",
        dir.path().to_str().expect("repo path"),
    ]);

    assert_eq!(code, 1);
    assert!(stderr.contains("No tracked file matches"));
    assert!(!output.exists());
}

#[test]
fn successful_run_writes_nested_report() {
    let (dir, repo) = init_repo();
    let v1 = "{ \"dependencies\": { \"lodash\": \"^4.0.0\" } }\n";
    let v2 = "{ \"dependencies\": { \"lodash\": \"^4.1.0\" } }\n";
    commit_files(&repo, &[("package.json", v1)], "init", 1_700_000_000);
    commit_files(&repo, &[("package.json", v2)], "bump", 1_700_100_000);
    let out = tempfile::tempdir().expect("out dir");
    let output = out.path().join("output.json");

    let (code, stdout, _stderr) = run_tracker(&[
        "lodash",
        output.to_str().expect("output path"),
        "package.json",
        dir.path().to_str().expect("repo path"),
    ]);

    assert_eq!(code, 0);
    assert!(stdout.contains("Wrote 1 manifest histories"));

    let report = read_report(&output);
    assert_eq!(report[0]["manifestPath"], "package.json");
    let versions: Vec<&str> = report[0]["history"]
        .as_array()
        .expect("history array")
        .iter()
        .map(|entry| entry["version"].as_str().expect("version"))
        .collect();
    assert_eq!(versions, vec!["^4.1.0", "^4.0.0"]);
}

#[test]
fn absent_package_writes_empty_history_and_exits_zero() {
    let (dir, repo) = init_repo();
    let content = "{ \"dependencies\": { \"lodash\": \"^4.0.0\" } }\n";
    commit_files(&repo, &[("package.json", content)], "init", 1_700_000_000);
    let out = tempfile::tempdir().expect("out dir");
    let output = out.path().join("output.json");

    let (code, _stdout, _stderr) = run_tracker(&[
        "left-pad",
        output.to_str().expect("output path"),
        "package.json",
        dir.path().to_str().expect("repo path"),
    ]);

    assert_eq!(code, 0);
    let report = read_report(&output);
    assert_eq!(report[0]["manifestPath"], "package.json");
    assert_eq!(report[0]["history"].as_array().expect("array").len(), 0);
}

#[test]
fn help_exits_zero() {
    let (code, stdout, _stderr) = run_tracker(&["--help"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("PACKAGE_NAME"));
}
