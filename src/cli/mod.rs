//! Command-line interface for srcreport
//!
//! This module provides the CLI structure and the single report run. It uses
//! clap for argument parsing; running with no arguments scans the current
//! working directory and writes `results.txt`.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod output;

pub use output::Output;

use crate::report::ReportWriter;
use crate::scan::{FileFilter, ReporterConfig, collect_source_files};

/// srcreport - Snapshot a project's source files into a single text report
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Report file to write (created or truncated)
    #[arg(short, long, value_name = "FILE", default_value = "results.txt")]
    pub output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Run one scan-and-report pass.
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let out = Output::new(self.verbose, self.quiet);

        let config = ReporterConfig::new(self.root, self.output);

        // Tell the user where results land before any work starts.
        out.plain(&format!(
            "Check result on file '{}'.",
            config.output_path.display()
        ));

        let filter = FileFilter::new(&config)?;
        let matches = collect_source_files(&config, &filter)?;
        out.verbose(&format!(
            "{} files matched under '{}'",
            matches.len(),
            config.root.display()
        ));

        let writer = ReportWriter::new(&config.output_path);
        let stats = writer.write(&matches)?;

        out.success(&format!(
            "Wrote {} files ({} bytes) to '{}'",
            stats.files_written,
            stats.bytes_written,
            config.output_path.display()
        ));
        Ok(())
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    // Keep globset/walkdir internals out of normal verbose output
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            tracing_subscriber::EnvFilter::new("debug,globset=warn")
        } else {
            tracing_subscriber::EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
