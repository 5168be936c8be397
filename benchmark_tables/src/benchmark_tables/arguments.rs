//!
//! The benchmark tables arguments.
//!

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark tables arguments.
///
#[derive(Debug, Default, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints every processing step and the rendered tables.
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppresses the terminal output except for errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Exits without waiting for Enter to be pressed.
    #[arg(long)]
    pub no_pause: bool,

    /// The directory to write the text report to.
    /// Defaults to the current working directory.
    #[arg(short, long)]
    pub output_directory: Option<PathBuf>,

    /// The benchmark report to convert.
    /// If not provided, a file selection dialog is opened.
    pub input_path: Option<PathBuf>,
}

impl Arguments {
    ///
    /// Whether the program must wait for Enter before exiting.
    ///
    pub fn is_pause_required(&self) -> bool {
        !self.no_pause && std::io::stdin().is_terminal()
    }
}
