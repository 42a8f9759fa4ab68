//! version-tracker - track the distinct versions a dependency has taken
//! across the history of a repository's package manifests.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use histmine::config::VersionOptions;
use histmine::extract::ManifestExtractor;
use histmine::git::GitHistory;
use histmine::pattern::PathPattern;
use histmine::{pipeline, reporters};

/// Track a dependency's version through manifest history
#[derive(Parser, Debug)]
#[command(name = "version-tracker")]
#[command(
    version,
    about = "Collect every version a dependency has been pinned to across manifest history",
    after_help = "\
Examples:
  version-tracker lodash
  version-tracker lodash lodash-history.json
  version-tracker react output.json package.json ../my-app"
)]
struct Args {
    /// Dependency to look up in dependencies/devDependencies
    package_name: String,

    /// Output JSON file
    #[arg(default_value = "output.json")]
    output_file: PathBuf,

    /// Manifest file name or glob to track
    #[arg(default_value = "package.json")]
    manifest: String,

    /// Repository to scan
    #[arg(default_value = ".")]
    repo_path: PathBuf,
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

    let options = VersionOptions {
        package: args.package_name,
        output: args.output_file,
        manifest_pattern: args.manifest,
        repo: args.repo_path,
    };

    if let Err(e) = run(&options) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(options: &VersionOptions) -> Result<()> {
    let pattern = PathPattern::new(&options.manifest_pattern)?;
    let history = GitHistory::open(&options.repo)?;

    let manifests = pipeline::discover_manifests(&history, &pattern)?;
    if manifests.is_empty() {
        bail!(
            "No tracked file matches '{}' in {}",
            options.manifest_pattern,
            options.repo.display()
        );
    }

    let extractor = ManifestExtractor::new(&options.package);
    let mut report = Vec::with_capacity(manifests.len());
    for manifest in &manifests {
        let scanned = pipeline::version_scan(&history, manifest, &extractor)
            .with_context(|| format!("Failed to scan history of {}", manifest))?;
        report.push(scanned);
    }

    reporters::write_version_report(&report, &options.output)?;
    println!(
        "Wrote {} manifest histories to {}",
        report.len(),
        options.output.display()
    );
    Ok(())
}
