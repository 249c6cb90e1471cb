//! Reporter configuration
//!
//! The fixed skip/include/exclude sets live here as data so the walker and
//! filter stay free of inline literals.

use std::path::PathBuf;

/// Directory names whose entire subtree is excluded from matching
pub const SKIP_DIRS: &[&str] = &[
    ".bundle",
    "android",
    "scripts",
    "ios",
    "certs",
    "assets",
    "libs",
    "localization",
    "esm",
    "lib",
    "node_modules",
    ".next",
    "__generated__",
    ".git",
    ".idea",
    ".vscode",
    "build",
    "dist",
    "coverage",
    "public",
    "out",
    "tmp",
    "temp",
];

/// Filename glob patterns selecting candidate files
pub const INCLUDE_PATTERNS: &[&str] = &[
    "*.go", "*.mod", "*.ts", "*.tsx", "*.js", "*.jsx", "*.json", "*.md", "*.yml", "*.yaml",
    "*.env",
];

/// Exact filenames dropped even when they match an include pattern
pub const EXCLUDED_FILES: &[&str] = &["blockchain_data.json", "listing.py", "package-lock.json"];

/// Naming convention that disqualifies otherwise-matching files
pub const TEST_FILE_PATTERN: &str = "*.test.*";

/// Configuration for one report run
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Root of the tree to scan
    pub root: PathBuf,
    /// Report file to create or truncate
    pub output_path: PathBuf,
    pub skip_dirs: Vec<String>,
    pub include_patterns: Vec<String>,
    pub excluded_files: Vec<String>,
}

impl ReporterConfig {
    /// Create a configuration with the default filter sets
    pub fn new(root: PathBuf, output_path: PathBuf) -> Self {
        Self {
            root,
            output_path,
            skip_dirs: SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            include_patterns: INCLUDE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            excluded_files: EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("."), PathBuf::from("results.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReporterConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.output_path, PathBuf::from("results.txt"));
        assert!(config.skip_dirs.iter().any(|d| d == "node_modules"));
        assert!(config.include_patterns.iter().any(|p| p == "*.go"));
        assert!(config.excluded_files.iter().any(|f| f == "package-lock.json"));
    }
}
