//!
//! The native open-file dialog selector.
//!

use std::path::PathBuf;

use super::Selector;

///
/// The native open-file dialog selector.
///
/// `rfd` sets up the platform dialog toolkit for each dialog it shows and tears
/// it down afterwards, so this selector holds only the dialog configuration.
/// The filters are hints for the dialog only, so any file can still be picked.
///
#[derive(Debug)]
pub struct Dialog {
    /// The dialog window title.
    title: String,
    /// The directory the dialog opens in.
    directory: Option<PathBuf>,
}

impl Dialog {
    /// The default dialog window title.
    pub const TITLE: &'static str = "Select a benchmark report";

    /// The file type filters, in the order they are offered.
    pub const FILTERS: [(&'static str, &'static [&'static str]); 3] = [
        ("Text files", &["txt"]),
        ("JSON files", &["json"]),
        ("All files", &["*"]),
    ];

    ///
    /// Creates a dialog opening in the current working directory.
    ///
    pub fn new() -> Self {
        Self {
            title: Self::TITLE.to_owned(),
            directory: std::env::current_dir().ok(),
        }
    }
}

impl Selector for Dialog {
    fn select(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title(self.title.as_str());
        for (name, extensions) in Self::FILTERS.iter() {
            dialog = dialog.add_filter(*name, *extensions);
        }
        if let Some(directory) = self.directory.as_ref() {
            dialog = dialog.set_directory(directory);
        }
        dialog
            .pick_file()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self::new()
    }
}
