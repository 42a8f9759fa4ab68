//! Core data models for histmine
//!
//! Shared between the pipelines and the reporters. Everything here is plain
//! data: read from history once, serialized at the end of a run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A commit as seen by the history walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Full commit hash
    pub hash: String,
    /// Committer date, formatted YYYY-MM-DD
    pub date: String,
}

/// Traversal order for a history walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOrder {
    /// First commit first. Required by the sequential dedup policy.
    OldestFirst,
    /// Log default: most recent commit first.
    NewestFirst,
}

/// One keyword sighting: a matching line of one file at one commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRecord {
    pub filename: String,
    pub date: String,
    pub line: String,
}

/// A `{date, line}` pair inside a grouped report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedEntry {
    pub date: String,
    pub line: String,
}

/// Records grouped by filename, each file's entries in extraction order.
///
/// BTreeMap keeps the filename keys deterministic; the per-file ordering is
/// the invariant that matters.
pub type GroupedReport = BTreeMap<String, Vec<GroupedEntry>>;

/// Group a flat record list by filename, preserving per-file order.
pub fn group_by_file(records: &[ExtractionRecord]) -> GroupedReport {
    let mut grouped = GroupedReport::new();
    for record in records {
        grouped
            .entry(record.filename.clone())
            .or_default()
            .push(GroupedEntry {
                date: record.date.clone(),
                line: record.line.clone(),
            });
    }
    grouped
}

/// First sighting of one distinct version value of a dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub commit: String,
    pub date: String,
    pub version: String,
}

/// The deduplicated version history of one manifest file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestHistory {
    pub manifest_path: String,
    pub history: Vec<VersionEntry>,
}
