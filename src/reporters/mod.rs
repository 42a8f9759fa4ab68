//! Output reporters for scan results
//!
//! Supported destinations:
//! - `text` - grouped-by-file console listing (default)
//! - `csv` - one row per record, every field quoted
//! - `json` - records grouped by filename
//!
//! CSV and JSON may both be requested; that produces both files and one
//! warning line.

mod csv;
mod json;
mod text;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{ExtractionRecord, ManifestHistory};

/// Write a keyword scan's records to the requested destinations, or list
/// them on the console when none was given.
pub fn emit_keyword_report(
    records: &[ExtractionRecord],
    csv_path: Option<&Path>,
    json_path: Option<&Path>,
) -> Result<()> {
    if csv_path.is_some() && json_path.is_some() {
        println!("Warning: both --csv and --json were supplied; writing both");
    }

    if let Some(path) = csv_path {
        fs::write(path, csv::render(records)?)
            .with_context(|| format!("Failed to write CSV report to {}", path.display()))?;
    }
    if let Some(path) = json_path {
        fs::write(path, json::render(records)?)
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
    }
    if csv_path.is_none() && json_path.is_none() {
        print!("{}", text::render(records));
    }
    Ok(())
}

/// Write a version scan's nested report: one JSON array with one element per
/// discovered manifest.
pub fn write_version_report(histories: &[ManifestHistory], path: &Path) -> Result<()> {
    fs::write(path, json::render_versions(histories)?)
        .with_context(|| format!("Failed to write version report to {}", path.display()))
}
