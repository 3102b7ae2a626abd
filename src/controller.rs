/// Command dispatch
///
/// Every UI event is turned into a `Command` and handed to the
/// `Controller`, which mutates the `Session` and hands back a freshly
/// rendered frame. The controller knows nothing about the GUI toolkit;
/// the disk is reached only through the `ImageStore` it owns.
use image::RgbImage;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::processing::Viewport;
use crate::state::edit::Adjustments;
use crate::state::session::{Selection, Session};
use crate::storage::ImageStore;

/// A single user intent, independent of which widget produced it
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open these files, mirror them into the working folder and add them
    Load(Vec<PathBuf>),
    /// Preview the image stored at this path
    Select(PathBuf),
    /// Delete the image from the library and from disk
    Remove(PathBuf),
    SetThreshold(u8),
    SetInvert(bool),
    SetBrightnessEffect(bool),
    SetWatercolorEffect(bool),
    /// Restore default adjustments
    ResetAdjustments,
    /// The display area changed size
    Resize(Viewport),
}

/// Summary of a load batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Entries that were not in the library before
    pub added: usize,
    /// Entries whose image was replaced by a re-load
    pub replaced: usize,
}

pub struct Controller<S: ImageStore> {
    store: S,
    session: Session,
    /// Adjustments at startup, restored by `Command::ResetAdjustments`
    defaults: Adjustments,
}

impl<S: ImageStore> Controller<S> {
    /// Create a controller and fill the library from the working folder
    ///
    /// Files that cannot be decoded are skipped without notice.
    pub fn new(store: S, defaults: Adjustments, viewport: Viewport) -> Self {
        let mut session = Session::new(defaults, viewport);

        for (path, image) in store.scan() {
            session.library.insert(path, image);
        }

        log::info!("🎨 Library initialized with {} images", session.library.len());

        Self {
            store,
            session,
            defaults,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply a command, then redraw
    ///
    /// # Returns
    /// * `Ok(Some(frame))` - The selected image rendered with current settings
    /// * `Ok(None)` - Nothing is selected (or the viewport is empty)
    /// * `Err(e)` - The command failed; state reflects any work done before
    ///   the failure
    pub fn dispatch(&mut self, command: Command) -> Result<Option<RgbImage>> {
        match command {
            Command::Load(paths) => {
                self.load(&paths)?;
            }
            Command::Select(path) => self.select(path)?,
            Command::Remove(path) => self.remove(&path)?,
            Command::SetThreshold(value) => self.session.adjustments.threshold = value,
            Command::SetInvert(on) => self.session.adjustments.invert = on,
            Command::SetBrightnessEffect(on) => self.session.adjustments.brightness_enabled = on,
            Command::SetWatercolorEffect(on) => self.session.adjustments.watercolor_enabled = on,
            Command::ResetAdjustments => self.session.adjustments = self.defaults,
            Command::Resize(viewport) => self.session.viewport = viewport,
        }

        Ok(self.redraw())
    }

    /// Render the selected image; None when nothing is selected
    pub fn redraw(&self) -> Option<RgbImage> {
        self.session.redraw()
    }

    /// Open, mirror and insert each path in order
    ///
    /// Stops at the first failure. Images loaded before it stay in the library.
    pub fn load(&mut self, paths: &[PathBuf]) -> Result<LoadSummary> {
        let mut summary = LoadSummary::default();

        for path in paths {
            let image = self.store.open(path)?;
            let stored = self.store.mirror(path, &image)?;

            if self.session.library.insert(stored, image) {
                summary.added += 1;
            } else {
                summary.replaced += 1;
            }
        }

        log::info!(
            "✅ Loaded {} new, {} replaced ({} total)",
            summary.added,
            summary.replaced,
            self.session.library.len()
        );
        Ok(summary)
    }

    /// Make `path` the previewed image
    pub fn select(&mut self, path: PathBuf) -> Result<()> {
        if !self.session.library.contains(&path) {
            return Err(AppError::UnknownImage(path));
        }
        self.session.selection = Selection::Image(path);
        Ok(())
    }

    /// Delete `path` from disk and from the library
    ///
    /// Only paths in the library are touched. A failed delete is logged;
    /// the entry is dropped from the library regardless, so the list and
    /// the disk may disagree afterwards.
    pub fn remove(&mut self, path: &Path) -> Result<()> {
        if !self.session.library.contains(path) {
            return Err(AppError::UnknownImage(path.to_path_buf()));
        }

        if let Err(e) = self.store.remove(path) {
            log::error!("❌ Could not delete file: {}", e);
        }

        self.session.library.remove(path);
        log::info!("🗑️  Removed {}", path.display());

        if self.session.selection.is_selected(path) {
            self.session.selection = Selection::None;
        }
        Ok(())
    }
}
