//! # srcreport - Project Source Snapshots in One File
//!
//! srcreport walks a project directory, selects source-like files by
//! extension while skipping build/vendor/dependency directories, and writes
//! every surviving file's path and contents into a single text report.
//!
//! ## Features
//!
//! - **One-shot snapshots**: the whole tree in one `results.txt`
//! - **Sensible pruning**: `node_modules`, `.git`, `dist` and friends never
//!   contribute matches
//! - **Deterministic output**: repeat runs over an unchanged tree produce
//!   byte-identical reports
//! - **Fail fast**: an unreadable source file aborts the run instead of
//!   emitting a truncated record
//!
//! ## Quick Start
//!
//! ```bash
//! # Install srcreport
//! cargo install srcreport
//!
//! # Snapshot the current directory into results.txt
//! srcreport
//!
//! # Snapshot another tree into a custom report file
//! srcreport path/to/project -o snapshot.txt
//! ```

pub mod cli;
pub mod report;
pub mod scan;

pub use cli::{Cli, Output};
pub use report::{ReportStats, ReportWriter};
pub use scan::{FileFilter, ReporterConfig, collect_source_files};
