//! Run configuration
//!
//! Options are parsed from the command line once, frozen into these structs
//! at the entry boundary, and passed by reference from there on. Nothing in
//! the library reads ambient state.

use std::path::PathBuf;

/// Options for a keyword-tracker run.
#[derive(Debug, Clone)]
pub struct KeywordOptions {
    /// Repository to scan (the working directory for the CLI).
    pub repo: PathBuf,
    /// Glob or literal selecting which files' history is in scope.
    pub files: String,
    /// Case-sensitive literal substring to search for.
    pub keyword: String,
    /// Optional CSV destination.
    pub csv: Option<PathBuf>,
    /// Optional grouped-JSON destination.
    pub json: Option<PathBuf>,
    /// Suppress lines identical to the file's last recorded line.
    pub dedupe: bool,
}

/// Options for a version-tracker run.
#[derive(Debug, Clone)]
pub struct VersionOptions {
    /// Dependency name to resolve in each manifest revision.
    pub package: String,
    /// Where the JSON report is written.
    pub output: PathBuf,
    /// Manifest file name or glob to discover.
    pub manifest_pattern: String,
    /// Repository to scan.
    pub repo: PathBuf,
}
