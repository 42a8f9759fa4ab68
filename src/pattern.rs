//! Path pattern matching for history traversal
//!
//! A pattern is either a glob (when it contains glob metacharacters) or a
//! literal. Literals match the full relative path or the bare file name, so
//! `package.json` also finds manifests nested in subdirectories. An exact
//! pattern matches one path only; the version pipeline uses it to scope a
//! walk to a single already-discovered manifest.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::path::Path;

#[derive(Debug, Clone)]
enum Matcher {
    Glob(GlobMatcher),
    /// Whole path or file name equals the pattern.
    Literal,
    /// Whole path equals the pattern.
    Exact,
}

/// A compiled file-selection pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    matcher: Matcher,
}

impl PathPattern {
    /// Compile a user-supplied pattern. Fails on invalid glob syntax.
    pub fn new(pattern: &str) -> Result<Self> {
        let matcher = if pattern.contains(['*', '?', '[', '{']) {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid glob pattern '{}'", pattern))?;
            Matcher::Glob(glob.compile_matcher())
        } else {
            Matcher::Literal
        };
        Ok(Self {
            raw: pattern.to_string(),
            matcher,
        })
    }

    /// A pattern matching exactly one repo-relative path.
    pub fn exact(path: &str) -> Self {
        Self {
            raw: path.to_string(),
            matcher: Matcher::Exact,
        }
    }

    /// The pattern as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Does a repo-relative path match?
    pub fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            Matcher::Glob(glob) => glob.is_match(path),
            Matcher::Literal => {
                path == self.raw
                    || Path::new(path)
                        .file_name()
                        .is_some_and(|name| name == self.raw.as_str())
            }
            Matcher::Exact => path == self.raw,
        }
    }
}
