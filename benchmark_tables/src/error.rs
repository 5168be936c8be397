//!
//! The benchmark tables pipeline error.
//!

///
/// The benchmark tables pipeline error.
///
/// A cancelled file selection is not represented here, as it is a normal termination.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input report could not be loaded.
    #[error(transparent)]
    Load(#[from] crate::input::error::Error),
    /// The output report could not be written.
    #[error(transparent)]
    Write(#[from] crate::output::error::Error),
}
