pub mod config;
pub mod directory;
pub mod filter;

// Re-export main types for easier access
pub use config::ReporterConfig;
pub use directory::collect_source_files;
pub use filter::FileFilter;
