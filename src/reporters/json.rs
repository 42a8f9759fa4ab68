//! JSON reporter
//!
//! Keyword reports group records by filename into `filename -> [{date,
//! line}]`; version reports are a top-level array with each manifest's
//! history nested inside.

use anyhow::Result;

use crate::models::{group_by_file, ExtractionRecord, ManifestHistory};

/// Render records grouped by filename as pretty-printed JSON.
pub fn render(records: &[ExtractionRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&group_by_file(records))?)
}

/// Render the version tracker's nested per-manifest report.
pub fn render_versions(histories: &[ManifestHistory]) -> Result<String> {
    Ok(serde_json::to_string_pretty(histories)?)
}
