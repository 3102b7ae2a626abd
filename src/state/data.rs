/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the storage layer and the UI layer.
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Represents a single loaded image in the library
#[derive(Debug, Clone, PartialEq)]
pub struct ImageEntry {
    /// Full path to the file in the working directory (unique key)
    pub path: PathBuf,
    /// Filename only (e.g., "sketch_01.png"), shown in the sidebar list
    pub filename: String,
    /// The unmodified image as decoded from disk
    pub original: DynamicImage,
}

impl ImageEntry {
    pub fn new(path: PathBuf, original: DynamicImage) -> Self {
        let filename = display_name(&path);
        Self {
            path,
            filename,
            original,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.original.width(), self.original.height())
    }
}

/// File name of `path`, or the whole path if it has none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string()
}
