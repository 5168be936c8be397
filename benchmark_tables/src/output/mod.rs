//!
//! The text report output.
//!

pub mod error;
pub mod table;

use std::path::Path;
use std::path::PathBuf;

use crate::model::report::Report;

use self::error::Error as OutputError;
use self::table::Table;

///
/// The text report, consisting of the tables written in order.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// The tables.
    pub tables: Vec<Table>,
}

impl Output {
    /// The title of the table with all measurements merged.
    pub const TITLE_ALL_RESULTS: &'static str = "ALL RESULTS";
    /// The title of the most efficient measurements table.
    pub const TITLE_MOST_EFFICIENT: &'static str = "MOST EFFICIENT";
    /// The title of the top performers table.
    pub const TITLE_TOP_PERFORMANCE: &'static str = "TOP PERFORMANCE";

    /// The first measurement number of each table.
    pub const START_INDEX: usize = 1;

    ///
    /// Derives the output path `<directory>/<input file stem>.txt`.
    ///
    pub fn path(input_path: &Path, directory: &Path) -> Result<PathBuf, OutputError> {
        let stem = input_path
            .file_stem()
            .ok_or_else(|| OutputError::NoFileName {
                path: input_path.to_path_buf(),
            })?;
        let mut file_name = stem.to_owned();
        file_name.push(".");
        file_name.push(crate::EXTENSION_TXT);
        Ok(directory.join(file_name))
    }

    ///
    /// Writes the report to a file, replacing it if it exists.
    ///
    pub fn write_to_file(&self, path: &Path) -> Result<(), OutputError> {
        std::fs::write(path, self.to_string()).map_err(|error| OutputError::Writing {
            path: path.to_path_buf(),
            error,
        })
    }
}

impl From<&Report> for Output {
    fn from(report: &Report) -> Self {
        let merged = report.merged();
        let tables = vec![
            Table::new(
                Self::TITLE_ALL_RESULTS,
                merged.as_slice(),
                Self::START_INDEX,
            ),
            Table::new(
                Self::TITLE_MOST_EFFICIENT,
                report.most_efficient.as_slice(),
                Self::START_INDEX,
            ),
            Table::new(
                Self::TITLE_TOP_PERFORMANCE,
                report.top_performers.as_slice(),
                Self::START_INDEX,
            ),
        ];
        Self { tables }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, table) in self.tables.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{table}")?;
        }
        Ok(())
    }
}
