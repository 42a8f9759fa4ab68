//! Histmine - git history mining utilities
//!
//! Tracks how a keyword (or a dependency's declared version) evolves across
//! a repository's commit history. Ships two binaries built on this library:
//! `keyword-tracker` and `version-tracker`.

pub mod config;
pub mod extract;
pub mod git;
pub mod models;
pub mod pattern;
pub mod pipeline;
pub mod reporters;
