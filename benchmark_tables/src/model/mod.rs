//!
//! The benchmark report data model.
//!

pub mod measurement;
pub mod report;
