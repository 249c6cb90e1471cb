//! Directory traversal and match-list collection
//!
//! Walks the configured root, prunes skip-named directories as whole
//! subtrees, and applies the filename filter to every regular file. Entries
//! are sorted per directory so repeat runs over an unchanged tree produce an
//! identical match list.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::config::ReporterConfig;
use super::filter::FileFilter;

/// Collect the ordered match list for a scan root.
///
/// Unreadable entries are logged and skipped; they never abort the walk. The
/// report file itself is never a match, even when its name satisfies an
/// include pattern.
pub fn collect_source_files(config: &ReporterConfig, filter: &FileFilter) -> Result<Vec<PathBuf>> {
    let output_abs = std::path::absolute(&config.output_path).with_context(|| {
        format!(
            "failed to resolve output path '{}'",
            config.output_path.display()
        )
    })?;

    let mut matches = Vec::new();
    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        // The scan root is exempt from pruning; only descendants are tested.
        .filter_entry(|entry| {
            !(entry.depth() > 0
                && entry.file_type().is_dir()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| filter.is_skipped_dir(name)))
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("error accessing path during walk: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!("skipping non-UTF-8 file name: {:?}", entry.file_name());
            continue;
        };
        if !filter.matches(name) {
            continue;
        }
        if is_output_file(entry.path(), &output_abs) {
            tracing::debug!("skipping report file itself: {}", entry.path().display());
            continue;
        }
        matches.push(entry.path().to_path_buf());
    }

    tracing::debug!(
        "collected {} matches under '{}'",
        matches.len(),
        config.root.display()
    );
    Ok(matches)
}

fn is_output_file(candidate: &Path, output_abs: &Path) -> bool {
    std::path::absolute(candidate)
        .map(|abs| abs == output_abs)
        .unwrap_or(false)
}
