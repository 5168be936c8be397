//!
//! The tab-separated measurement table.
//!

use crate::model::measurement::quantity::Quantity;
use crate::model::measurement::Measurement;

///
/// The tab-separated measurement table.
///
/// Every cell is centred within its column, and the columns are separated by tabs.
/// A column is as wide as its widest cell, but at least two characters wider than its header.
/// Trailing whitespace is removed from every line.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// The title printed above the header.
    pub title: String,
    /// The data rows.
    pub rows: Vec<Row>,
}

///
/// A numbered table row.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The running measurement number.
    pub number: usize,
    /// The core voltage and frequency as reported, followed by the rounded averages.
    pub values: [Quantity; 6],
}

impl Table {
    /// The column separator.
    pub const SEPARATOR: &'static str = "\t";

    /// The minimal number of spaces around a header.
    pub const HEADER_PADDING: usize = 2;

    /// The header row.
    /// The efficiency column is spelled `efficiencyJHT` for compatibility with existing reports.
    pub const HEADERS: [&'static str; 7] = [
        "Measuring Number",
        "coreVoltage",
        "frequency",
        "averageHashRate",
        "averageTemperature",
        "efficiencyJHT",
        "averageVRTemp",
    ];

    ///
    /// Builds a table with rows numbered from `start_index`.
    ///
    pub fn new(title: &str, measurements: &[Measurement], start_index: usize) -> Self {
        let rows = measurements
            .iter()
            .zip(start_index..)
            .map(|(measurement, number)| Row::new(number, measurement))
            .collect();
        Self {
            title: title.to_owned(),
            rows,
        }
    }

    ///
    /// Returns the width of each column.
    ///
    fn widths(cells: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = Self::HEADERS
            .iter()
            .map(|header| header.chars().count() + Self::HEADER_PADDING)
            .collect();
        for row in cells.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    ///
    /// Joins the cells of a line, centring each one within its column.
    ///
    fn line<S>(cells: &[S], widths: &[usize]) -> String
    where
        S: AsRef<str>,
    {
        let line = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let cell = cell.as_ref();
                let padding = width.saturating_sub(cell.chars().count());
                let left = padding / 2;
                format!("{}{cell}{}", " ".repeat(left), " ".repeat(padding - left))
            })
            .collect::<Vec<String>>()
            .join(Self::SEPARATOR);
        line.trim_end().to_owned()
    }
}

impl Row {
    ///
    /// Builds a row, rounding the averaged values only.
    ///
    pub fn new(number: usize, measurement: &Measurement) -> Self {
        Self {
            number,
            values: [
                measurement.core_voltage.clone(),
                measurement.frequency.clone(),
                measurement.average_hash_rate.rounded(),
                measurement.average_temperature.rounded(),
                measurement.efficiency_jth.rounded(),
                measurement.average_vr_temp.rounded(),
            ],
        }
    }

    ///
    /// Returns the displayed cells, without surrounding whitespace.
    ///
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(Table::HEADERS.len());
        cells.push(self.number.to_string());
        cells.extend(
            self.values
                .iter()
                .map(|value| value.to_string().trim().to_owned()),
        );
        cells
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<Vec<String>> = self.rows.iter().map(Row::cells).collect();
        let widths = Self::widths(cells.as_slice());

        writeln!(f)?;
        writeln!(f, "{}", self.title)?;
        write!(f, "{}", Self::line(&Self::HEADERS, widths.as_slice()))?;
        for row in cells.iter() {
            write!(f, "\n{}", Self::line(row.as_slice(), widths.as_slice()))?;
        }
        writeln!(f)
    }
}
