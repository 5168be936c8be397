//!
//! The benchmark report loading error.
//!

use std::path::PathBuf;

///
/// The benchmark report loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The report file cannot be opened or is not valid UTF-8.
    #[error("Benchmark report {path:?} reading: {error}")]
    Reading {
        /// The report path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The report file has no content at all.
    #[error("Benchmark report {path:?} is empty")]
    EmptyFile {
        /// The report path.
        path: PathBuf,
    },
    /// The report file is not a valid JSON report.
    #[error("Benchmark report {path:?} parsing: {error}")]
    Parsing {
        /// The report path.
        path: PathBuf,
        /// The underlying JSON error.
        error: serde_json::Error,
    },
}
