//!
//! The text report writing error.
//!

use std::path::PathBuf;

///
/// The text report writing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output file name cannot be derived from the input path.
    #[error("Input path {path:?} has no file name to derive the output file name from")]
    NoFileName {
        /// The input path.
        path: PathBuf,
    },
    /// The output file cannot be written.
    #[error("Text report {path:?} writing: {error}")]
    Writing {
        /// The output path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
}
