//! Git history extraction using libgit2
//!
//! Walks commit history, resolves the files a commit changed, and fetches
//! historical file content using the git2 crate (Rust bindings to libgit2).

use chrono::{TimeZone, Utc};
use git2::{ErrorCode, Repository, Sort};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::models::{CommitInfo, CommitOrder};
use crate::pattern::PathPattern;

/// Errors raised by a history source.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to open git repository at {path}: {source}")]
    Open { path: String, source: git2::Error },

    #[error(transparent)]
    Git(#[from] git2::Error),
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// The four operations the pipelines need from version control.
pub trait HistorySource {
    /// Commits whose changes touch a file matching `pattern`, in the
    /// requested order. Empty when nothing matches; an error only when the
    /// walk itself fails.
    fn list_commits(
        &self,
        pattern: &PathPattern,
        order: CommitOrder,
    ) -> HistoryResult<Vec<CommitInfo>>;

    /// Every file path changed by one commit.
    fn files_in_commit(&self, hash: &str) -> HistoryResult<Vec<String>>;

    /// Full content of `path` as committed in `hash`, or `None` when the
    /// path is absent from that commit's tree.
    fn file_content(&self, hash: &str, path: &str) -> HistoryResult<Option<String>>;

    /// All paths tracked at HEAD.
    fn tracked_files(&self) -> HistoryResult<Vec<String>>;
}

/// History source backed by a real repository.
pub struct GitHistory {
    repo: Repository,
}

impl std::fmt::Debug for GitHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHistory").finish_non_exhaustive()
    }
}

impl GitHistory {
    /// Open a git repository at `path` (or any subdirectory of one).
    pub fn open(path: &Path) -> HistoryResult<Self> {
        let repo = Repository::discover(path).map_err(|source| HistoryError::Open {
            path: path.display().to_string(),
            source,
        })?;
        debug!("Opened git repository at {:?}", repo.path());
        Ok(Self { repo })
    }

    /// Paths changed by `commit` relative to its first parent (the whole
    /// tree for a root commit).
    fn changed_paths(&self, commit: &git2::Commit) -> HistoryResult<Vec<String>> {
        let parent = commit.parent(0).ok();
        let tree = commit.tree()?;
        let parent_tree = parent.as_ref().map(|p| p.tree()).transpose()?;

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let mut paths = Vec::new();
        diff.foreach(
            &mut |delta, _| {
                if let Some(path) = delta.new_file().path() {
                    paths.push(path.to_string_lossy().to_string());
                }
                true
            },
            None,
            None,
            None,
        )?;
        Ok(paths)
    }
}

impl HistorySource for GitHistory {
    fn list_commits(
        &self,
        pattern: &PathPattern,
        order: CommitOrder,
    ) -> HistoryResult<Vec<CommitInfo>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        if let Err(e) = revwalk.push_head() {
            // A repository with no commits yet has no matching history.
            if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) {
                return Ok(Vec::new());
            }
            return Err(e.into());
        }

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let touched = self
                .changed_paths(&commit)?
                .iter()
                .any(|path| pattern.matches(path));
            if touched {
                commits.push(CommitInfo {
                    hash: oid.to_string(),
                    date: format_commit_date(&commit.time()),
                });
            }
        }

        // Sort::TIME yields newest first, the log default.
        if order == CommitOrder::OldestFirst {
            commits.reverse();
        }
        Ok(commits)
    }

    fn files_in_commit(&self, hash: &str) -> HistoryResult<Vec<String>> {
        let oid = git2::Oid::from_str(hash)?;
        let commit = self.repo.find_commit(oid)?;
        self.changed_paths(&commit)
    }

    fn file_content(&self, hash: &str, path: &str) -> HistoryResult<Option<String>> {
        let oid = git2::Oid::from_str(hash)?;
        let commit = self.repo.find_commit(oid)?;
        let tree = commit.tree()?;

        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let object = entry.to_object(&self.repo)?;
        match object.as_blob() {
            Some(blob) => Ok(Some(String::from_utf8_lossy(blob.content()).to_string())),
            None => Ok(None),
        }
    }

    fn tracked_files(&self) -> HistoryResult<Vec<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let tree = head.peel_to_tree()?;

        let mut files = Vec::new();
        tree.walk(git2::TreeWalkMode::PreOrder, |dir, entry| {
            if entry.kind() == Some(git2::ObjectType::Blob) {
                let path = if dir.is_empty() {
                    entry.name().unwrap_or("").to_string()
                } else {
                    format!("{}{}", dir, entry.name().unwrap_or(""))
                };
                files.push(path);
            }
            git2::TreeWalkResult::Ok
        })?;

        Ok(files)
    }
}

/// Format a git timestamp as YYYY-MM-DD.
fn format_commit_date(time: &git2::Time) -> String {
    match Utc.timestamp_opt(time.seconds(), 0).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "1970-01-01".to_string(),
    }
}
