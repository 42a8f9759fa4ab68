//! Git history access
//!
//! The pipelines talk to history through the narrow [`HistorySource`] trait
//! (list commits, list a commit's files, fetch content, list tracked files),
//! so they can run against an in-memory fake in tests. [`GitHistory`] is the
//! libgit2-backed production implementation.

pub mod history;

pub use history::{GitHistory, HistoryError, HistoryResult, HistorySource};
