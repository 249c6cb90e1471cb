pub mod writer;

pub use writer::{ReportStats, ReportWriter};
