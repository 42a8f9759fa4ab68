//! CSV reporter
//!
//! Header row `Filename,Date,Line`, one row per record. Every field is
//! quoted and embedded quotes are doubled, so lines containing commas or
//! quotes survive a round trip.

use anyhow::{anyhow, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::models::ExtractionRecord;

/// Render records as CSV.
pub fn render(records: &[ExtractionRecord]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(["Filename", "Date", "Line"])?;
    for record in records {
        writer.write_record([&record.filename, &record.date, &record.line])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV buffer: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}
