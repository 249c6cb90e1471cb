//! Report writer
//!
//! Writes one record per matched file to the report, in match-list order:
//!
//! ```text
//! File Path: <path>
//! Source Code:
//! <raw file content>
//! <blank line>
//! ```
//!
//! Files must be valid UTF-8; the first unreadable or undecodable file fails
//! the whole run.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Totals from a completed report run
#[derive(Debug, Default)]
pub struct ReportStats {
    pub files_written: usize,
    pub bytes_written: u64,
}

/// Writes the aggregate report for a match list
pub struct ReportWriter {
    output_path: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting the given report path
    pub fn new(output_path: &Path) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
        }
    }

    /// Write one record per matched file, creating or truncating the report.
    ///
    /// Each source file is read in full before any byte of its record is
    /// written, so a failed read never leaves a truncated record behind.
    pub fn write(&self, matches: &[PathBuf]) -> Result<ReportStats> {
        let file = File::create(&self.output_path).with_context(|| {
            format!(
                "failed to create report file '{}'",
                self.output_path.display()
            )
        })?;
        let mut writer = BufWriter::new(file);
        let mut stats = ReportStats::default();

        for path in matches {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read '{}'", path.display()))?;
            let record = format!(
                "File Path: {}\nSource Code:\n{}\n\n",
                path.display(),
                source
            );
            writer
                .write_all(record.as_bytes())
                .with_context(|| format!("failed to write record for '{}'", path.display()))?;
            stats.files_written += 1;
            stats.bytes_written += record.len() as u64;
        }

        writer.flush().with_context(|| {
            format!(
                "failed to flush report file '{}'",
                self.output_path.display()
            )
        })?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_record_format() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("main.go");
        fs::write(&src, "package main\n").unwrap();

        let output = temp.path().join("results.txt");
        let stats = ReportWriter::new(&output)
            .write(std::slice::from_ref(&src))
            .unwrap();

        assert_eq!(stats.files_written, 1);
        let report = fs::read_to_string(&output).unwrap();
        assert_eq!(
            report,
            format!("File Path: {}\nSource Code:\npackage main\n\n\n", src.display())
        );
    }

    #[test]
    fn test_bytes_written_counts_whole_records() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.ts");
        let b = temp.path().join("b.go");
        fs::write(&a, "let a = 1;\n").unwrap();
        fs::write(&b, "package b\n").unwrap();

        let output = temp.path().join("results.txt");
        let stats = ReportWriter::new(&output).write(&[a, b]).unwrap();

        assert_eq!(stats.bytes_written, fs::metadata(&output).unwrap().len());
    }

    #[test]
    fn test_records_in_match_list_order() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.ts");
        let b = temp.path().join("b.ts");
        fs::write(&a, "first").unwrap();
        fs::write(&b, "second").unwrap();

        let output = temp.path().join("results.txt");
        ReportWriter::new(&output)
            .write(&[b.clone(), a.clone()])
            .unwrap();

        let report = fs::read_to_string(&output).unwrap();
        let pos_b = report.find("b.ts").unwrap();
        let pos_a = report.find("a.ts").unwrap();
        assert!(pos_b < pos_a);
    }

    #[test]
    fn test_output_truncated_between_runs() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("x.js");
        fs::write(&src, "x").unwrap();

        let output = temp.path().join("results.txt");
        let writer = ReportWriter::new(&output);
        writer.write(std::slice::from_ref(&src)).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        writer.write(std::slice::from_ref(&src)).unwrap();
        let second = fs::read_to_string(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unreadable_file_fails_run() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone.ts");

        let output = temp.path().join("results.txt");
        let err = ReportWriter::new(&output)
            .write(&[missing.clone()])
            .unwrap_err();
        assert!(err.to_string().contains("gone.ts"));
    }

    #[test]
    fn test_invalid_utf8_fails_run() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("bad.js");
        fs::write(&bad, [0xff, 0xfe, 0x00, 0x42]).unwrap();

        let output = temp.path().join("results.txt");
        let err = ReportWriter::new(&output).write(&[bad]).unwrap_err();
        assert!(err.to_string().contains("bad.js"));
    }
}
