use image::DynamicImage;
use std::path::{Path, PathBuf};

use super::data::ImageEntry;

/// The Library holds every loaded original image, keyed by file path.
/// Entries keep their load order so the sidebar list stays stable.
#[derive(Debug, Default)]
pub struct Library {
    entries: Vec<ImageEntry>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images in the library
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an image to the library
    ///
    /// Paths are unique: adding a path that is already present replaces
    /// its image but keeps its position in the list.
    /// Returns true if a new entry was created.
    pub fn insert(&mut self, path: PathBuf, original: DynamicImage) -> bool {
        match self.position(&path) {
            Some(index) => {
                self.entries[index] = ImageEntry::new(path, original);
                false
            }
            None => {
                self.entries.push(ImageEntry::new(path, original));
                true
            }
        }
    }

    /// Remove an image from the library, returning it if it was present
    pub fn remove(&mut self, path: &Path) -> Option<ImageEntry> {
        let index = self.position(path)?;
        Some(self.entries.remove(index))
    }

    /// Look up an image by path
    pub fn get(&self, path: &Path) -> Option<&ImageEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.position(path).is_some()
    }

    /// All images in load order
    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    fn position(&self, path: &Path) -> Option<usize> {
        self.entries.iter().position(|entry| entry.path == path)
    }
}
