//! keyword-tracker - track every line containing a keyword across the
//! history of files matching a glob.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use histmine::config::KeywordOptions;
use histmine::extract::KeywordExtractor;
use histmine::git::GitHistory;
use histmine::pattern::PathPattern;
use histmine::{pipeline, reporters};

/// Track a keyword through git history
#[derive(Parser, Debug)]
#[command(name = "keyword-tracker")]
#[command(
    version,
    about = "Scan a repository's commit history for lines containing a keyword",
    after_help = "\
Examples:
  keyword-tracker --files '*.json' --keyword lodash
  keyword-tracker --files package.json --keyword lodash --dedupe
  keyword-tracker --files 'src/*.js' --keyword TODO --csv todos.csv --json todos.json"
)]
struct Args {
    /// Glob (or literal path) selecting which files' history to scan
    #[arg(long)]
    files: String,

    /// Case-sensitive keyword to search for in each historical revision
    #[arg(long)]
    keyword: String,

    /// Write records as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write records grouped by file as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Only record a line when it differs from the file's last recorded line
    #[arg(long)]
    dedupe: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // clap exits with 2 on usage errors by default; this tool's contract is 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let options = KeywordOptions {
        repo: PathBuf::from("."),
        files: args.files,
        keyword: args.keyword,
        csv: args.csv,
        json: args.json,
        dedupe: args.dedupe,
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(options: &KeywordOptions) -> Result<()> {
    let pattern = PathPattern::new(&options.files)?;
    let history = GitHistory::open(&options.repo)?;
    let extractor = KeywordExtractor::new(&options.keyword);

    let records = pipeline::keyword_scan(&history, &pattern, &extractor, options.dedupe)?;
    reporters::emit_keyword_report(&records, options.csv.as_deref(), options.json.as_deref())?;
    println!("Found {} occurrences", records.len());
    Ok(())
}
