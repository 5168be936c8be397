//!
//! The benchmark tables library.
//!

pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod selector;
pub mod util;

use std::path::Path;

pub use crate::error::Error;
pub use crate::input::error::Error as LoadError;
pub use crate::input::Input;
pub use crate::model::measurement::quantity::Quantity;
pub use crate::model::measurement::Measurement;
pub use crate::model::report::Report;
pub use crate::output::error::Error as WriteError;
pub use crate::output::table::Table;
pub use crate::output::Output;
#[cfg(feature = "dialog")]
pub use crate::selector::dialog::Dialog as DialogSelector;
pub use crate::selector::path::Path as PathSelector;
pub use crate::selector::Selector;
pub use crate::util::round::round_if_needed;

/// The output file extension.
pub const EXTENSION_TXT: &str = "txt";

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

///
/// Converts the benchmark report at `input_path` into the text report written to `output_path`.
///
/// Returns the loaded report together with the written tables.
///
pub fn convert(input_path: &Path, output_path: &Path) -> Result<(Input, Output), Error> {
    let input = Input::try_from(input_path)?;
    let output = Output::from(&input.report);
    output.write_to_file(output_path)?;
    Ok((input, output))
}
