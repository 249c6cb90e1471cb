//! Filename matching and exclusion rules
//!
//! A file is matched when its name satisfies at least one include pattern and
//! none of the exclusion rules (exact-name list, `*.test.*` convention). The
//! skip-directory check also lives here so all filtering shares one compiled
//! view of the configuration.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher, GlobSet, GlobSetBuilder};
use std::collections::HashSet;

use super::config::{ReporterConfig, TEST_FILE_PATTERN};

/// Compiled filter over the configured include/exclude sets
pub struct FileFilter {
    include: GlobSet,
    excluded_names: HashSet<String>,
    test_file: GlobMatcher,
    skip_dirs: HashSet<String>,
}

impl FileFilter {
    /// Compile the patterns from a configuration
    pub fn new(config: &ReporterConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.include_patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("invalid include pattern '{pattern}'"))?;
            builder.add(glob);
        }
        let include = builder
            .build()
            .context("failed to build include pattern set")?;

        let test_file = Glob::new(TEST_FILE_PATTERN)
            .context("invalid test file pattern")?
            .compile_matcher();

        Ok(Self {
            include,
            excluded_names: config.excluded_files.iter().cloned().collect(),
            test_file,
            skip_dirs: config.skip_dirs.iter().cloned().collect(),
        })
    }

    /// Check whether a directory name disqualifies its whole subtree
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
    }

    /// Check whether a file name matches any include pattern
    pub fn is_candidate(&self, file_name: &str) -> bool {
        self.include.is_match(file_name)
    }

    /// Check whether a file name is ruled out by the exclusion rules
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded_names.contains(file_name) || self.test_file.is_match(file_name)
    }

    /// Candidate and not excluded
    pub fn matches(&self, file_name: &str) -> bool {
        self.is_candidate(file_name) && !self.is_excluded(file_name)
    }
}
