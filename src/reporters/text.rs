//! Text (console) reporter
//!
//! One block per file, each line a `date  value` pair in extraction order.

use crate::models::{group_by_file, ExtractionRecord};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render a grouped-by-file listing for the console.
pub fn render(records: &[ExtractionRecord]) -> String {
    let mut out = String::new();
    for (filename, entries) in group_by_file(records) {
        out.push_str(&format!("{BOLD}{filename}{RESET}\n"));
        for entry in entries {
            out.push_str(&format!("  {}  {}\n", entry.date, entry.line));
        }
        out.push('\n');
    }
    out
}
