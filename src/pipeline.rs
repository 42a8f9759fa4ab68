//! History scan pipelines
//!
//! Both tools walk commits strictly in sequence and differ only in their
//! dedup policy: the keyword scan suppresses a line equal to the file's
//! immediately preceding recorded line (which is why it walks oldest-first),
//! while the version scan keeps the first sighting of each distinct version
//! value in whatever order the log yields.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::extract::Extract;
use crate::git::HistorySource;
use crate::models::{CommitInfo, CommitOrder, ExtractionRecord, ManifestHistory, VersionEntry};
use crate::pattern::PathPattern;

fn commit_bar(commits: &[CommitInfo], message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(commits.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap(),
    );
    bar.set_message(message);
    bar
}

/// Walk the history of files matching `pattern` oldest-first and collect one
/// record per extracted line.
///
/// With `dedupe`, a line identical to the last line recorded for that file is
/// skipped without touching the dedup state, so only changes are reported.
/// Per-commit failures are logged and contribute nothing; only the initial
/// history query is fatal.
pub fn keyword_scan(
    source: &dyn HistorySource,
    pattern: &PathPattern,
    extractor: &dyn Extract,
    dedupe: bool,
) -> Result<Vec<ExtractionRecord>> {
    let commits = source
        .list_commits(pattern, CommitOrder::OldestFirst)
        .with_context(|| format!("Failed to list commits for '{}'", pattern.as_str()))?;

    let bar = commit_bar(&commits, "Scanning commits");
    let mut records = Vec::new();
    let mut last_recorded: HashMap<String, String> = HashMap::new();

    for commit in &commits {
        let files = match source.files_in_commit(&commit.hash) {
            Ok(files) => files,
            Err(e) => {
                warn!("Skipping commit {}: {}", commit.hash, e);
                bar.inc(1);
                continue;
            }
        };

        for file in files.into_iter().filter(|f| pattern.matches(f)) {
            let content = match source.file_content(&commit.hash, &file) {
                Ok(Some(content)) => content,
                // File absent at this commit: expected, zero records.
                Ok(None) => continue,
                Err(e) => {
                    warn!("Skipping {} at {}: {}", file, commit.hash, e);
                    continue;
                }
            };

            for line in extractor.extract(&content) {
                if dedupe {
                    if last_recorded.get(&file).is_some_and(|last| last == &line) {
                        continue;
                    }
                    last_recorded.insert(file.clone(), line.clone());
                }
                records.push(ExtractionRecord {
                    filename: file.clone(),
                    date: commit.date.clone(),
                    line,
                });
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(records)
}

/// Tracked files at HEAD matching the manifest pattern.
pub fn discover_manifests(
    source: &dyn HistorySource,
    pattern: &PathPattern,
) -> Result<Vec<String>> {
    let manifests = source
        .tracked_files()
        .context("Failed to list tracked files")?
        .into_iter()
        .filter(|path| pattern.matches(path))
        .collect();
    Ok(manifests)
}

/// Walk one manifest's history (log order, newest first) and collect the
/// first sighting of each distinct version value the extractor resolves.
pub fn version_scan(
    source: &dyn HistorySource,
    manifest_path: &str,
    extractor: &dyn Extract,
) -> Result<ManifestHistory> {
    let pattern = PathPattern::exact(manifest_path);
    let commits = source
        .list_commits(&pattern, CommitOrder::NewestFirst)
        .with_context(|| format!("Failed to list commits for '{}'", manifest_path))?;

    if commits.is_empty() {
        println!("No commits found for {}", manifest_path);
        return Ok(ManifestHistory {
            manifest_path: manifest_path.to_string(),
            history: Vec::new(),
        });
    }

    let bar = commit_bar(&commits, "Scanning manifest revisions");
    let mut seen: HashSet<String> = HashSet::new();
    let mut history = Vec::new();

    for commit in &commits {
        let content = match source.file_content(&commit.hash, manifest_path) {
            Ok(Some(content)) => content,
            Ok(None) => {
                bar.inc(1);
                continue;
            }
            Err(e) => {
                warn!("Skipping {} at {}: {}", manifest_path, commit.hash, e);
                bar.inc(1);
                continue;
            }
        };

        for version in extractor.extract(&content) {
            if seen.insert(version.clone()) {
                history.push(VersionEntry {
                    commit: commit.hash.clone(),
                    date: commit.date.clone(),
                    version,
                });
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(ManifestHistory {
        manifest_path: manifest_path.to_string(),
        history,
    })
}
