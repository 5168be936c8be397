//!
//! The benchmark report.
//!

use crate::model::measurement::Measurement;
use crate::util::merge::merge_distinct;

///
/// The benchmark report, as produced by the benchmarking tool.
///
/// Every collection may be absent, in which case it is empty.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
pub struct Report {
    /// All measurements.
    #[serde(default)]
    pub all_results: Vec<Measurement>,
    /// The most efficient measurements, selected by the benchmarking tool.
    #[serde(default)]
    pub most_efficient: Vec<Measurement>,
    /// The measurements with the highest hash rate, selected by the benchmarking tool.
    #[serde(default)]
    pub top_performers: Vec<Measurement>,
}

impl Report {
    ///
    /// Returns all measurements followed by those selected measurements that are
    /// missing from `all_results`, in the order of their first occurrence.
    ///
    pub fn merged(&self) -> Vec<Measurement> {
        merge_distinct(
            self.all_results.as_slice(),
            &[self.most_efficient.as_slice(), self.top_performers.as_slice()],
        )
    }
}
