/// Per-session UI state
///
/// Everything the redraw depends on lives here, so a frame is a pure
/// function of (selected original, adjustments, viewport).
use image::RgbImage;
use std::path::{Path, PathBuf};

use super::edit::Adjustments;
use super::library::Library;
use crate::processing::{render, Viewport};

/// Which image, if any, is being previewed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Image(PathBuf),
}

impl Selection {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Selection::None => None,
            Selection::Image(path) => Some(path.as_path()),
        }
    }

    pub fn is_selected(&self, path: &Path) -> bool {
        self.path() == Some(path)
    }
}

/// The full session: loaded originals plus everything that affects the view
#[derive(Debug, Default)]
pub struct Session {
    pub library: Library,
    pub selection: Selection,
    pub adjustments: Adjustments,
    pub viewport: Viewport,
}

impl Session {
    pub fn new(adjustments: Adjustments, viewport: Viewport) -> Self {
        Self {
            library: Library::new(),
            selection: Selection::None,
            adjustments,
            viewport,
        }
    }

    /// Render the selected image with the current settings
    ///
    /// Returns None when nothing is selected or the viewport is empty.
    pub fn redraw(&self) -> Option<RgbImage> {
        let path = self.selection.path()?;
        let entry = self.library.get(path)?;
        render(&entry.original, &self.adjustments, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb};

    #[test]
    fn test_redraw_without_selection_is_noop() {
        let mut session = Session::new(Adjustments::default(), Viewport::new(10, 10));
        session
            .library
            .insert(PathBuf::from("/work/a.png"), DynamicImage::ImageRgb8(RgbImage::new(4, 4)));
        assert!(session.redraw().is_none());
    }

    #[test]
    fn test_redraw_selected() {
        let mut session = Session::new(
            Adjustments {
                threshold: 150,
                ..Adjustments::default()
            },
            Viewport::new(1, 1),
        );
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 200, 200]));
        session
            .library
            .insert(PathBuf::from("/work/a.png"), DynamicImage::ImageRgb8(img));
        session.selection = Selection::Image(PathBuf::from("/work/a.png"));

        let frame = session.redraw().unwrap();
        assert_eq!(frame.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_selection_path() {
        let selection = Selection::Image(PathBuf::from("/work/a.png"));
        assert!(selection.is_selected(Path::new("/work/a.png")));
        assert!(!Selection::None.is_selected(Path::new("/work/a.png")));
    }
}
