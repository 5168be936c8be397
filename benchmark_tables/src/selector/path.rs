//!
//! The selector of a path known in advance.
//!

use std::path::PathBuf;

use super::Selector;

///
/// The selector of a path known in advance, e.g. given on the command line.
///
/// The path is returned once. An empty path counts as a cancelled selection.
///
#[derive(Debug)]
pub struct Path {
    /// The path to return.
    path: Option<PathBuf>,
}

impl Path {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl Selector for Path {
    fn select(&mut self) -> Option<PathBuf> {
        self.path
            .take()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
