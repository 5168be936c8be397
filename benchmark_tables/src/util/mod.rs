//!
//! Utility functions.
//!

pub mod merge;
pub mod round;
