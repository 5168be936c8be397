//!
//! The benchmark report input.
//!

pub mod error;

use std::path::Path;
use std::path::PathBuf;

use crate::model::report::Report;

use self::error::Error as InputError;

///
/// The benchmark report input, loaded from a file.
///
#[derive(Debug)]
pub struct Input {
    /// The path the report was read from.
    pub path: PathBuf,
    /// The decoded report.
    pub report: Report,
}

impl Input {
    ///
    /// Decodes a report from JSON text.
    ///
    /// Missing collections are treated as empty, so `{}` is a valid report.
    ///
    pub fn parse(path: &Path, text: &str) -> Result<Self, InputError> {
        if text.is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let report: Report =
            serde_json::from_str(text).map_err(|error| InputError::Parsing {
                path: path.to_path_buf(),
                error,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            report,
        })
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            path: path.to_path_buf(),
            error,
        })?;
        Self::parse(path, text.as_str())
    }
}
