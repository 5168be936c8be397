//!
//! The input file selector.
//!

#[cfg(feature = "dialog")]
pub mod dialog;
pub mod path;

use std::path::PathBuf;

///
/// The input file selector.
///
pub trait Selector {
    ///
    /// Returns the selected file, or `None` if the selection was cancelled.
    ///
    fn select(&mut self) -> Option<PathBuf>;
}
