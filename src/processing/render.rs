/// Frame rendering
///
/// Turns an original image plus the current adjustments into the pixel
/// buffer shown on screen. Always starts from the original, so nothing
/// derived is ever fed back into the library.
use image::{imageops::FilterType, DynamicImage, RgbImage};

use super::brightness::apply_threshold;
use super::watercolor::watercolor;
use crate::state::edit::Adjustments;

/// Size of the display area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if there is nothing to draw into
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Render `original` through the enabled effects and fit it to `viewport`
///
/// Effects run in a fixed order: brightness threshold, then watercolor.
/// The result is resized to exactly the viewport with Lanczos3.
///
/// # Returns
/// * `Some(frame)` - A `viewport.width` x `viewport.height` RGB frame
/// * `None` - The viewport is empty
pub fn render(original: &DynamicImage, adjustments: &Adjustments, viewport: Viewport) -> Option<RgbImage> {
    if viewport.is_empty() {
        return None;
    }

    let mut frame = if adjustments.brightness_enabled {
        apply_threshold(original, adjustments.threshold, adjustments.invert)
    } else {
        original.to_rgb8()
    };

    if adjustments.watercolor_enabled {
        frame = watercolor(&frame);
    }

    if frame.dimensions() == (viewport.width, viewport.height) {
        return Some(frame);
    }

    Some(image::imageops::resize(
        &frame,
        viewport.width,
        viewport.height,
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn two_pixels() -> DynamicImage {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([100, 100, 100]));
        img.put_pixel(1, 0, Rgb([200, 200, 200]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_empty_viewport_renders_nothing() {
        let adjustments = Adjustments::default();
        assert!(render(&two_pixels(), &adjustments, Viewport::new(0, 10)).is_none());
        assert!(render(&two_pixels(), &adjustments, Viewport::new(10, 0)).is_none());
    }

    #[test]
    fn test_native_size_applies_threshold_only() {
        let adjustments = Adjustments {
            threshold: 150,
            ..Adjustments::default()
        };
        let frame = render(&two_pixels(), &adjustments, Viewport::new(2, 1)).unwrap();
        assert_eq!(frame.get_pixel(0, 0), &Rgb([100, 100, 100]));
        assert_eq!(frame.get_pixel(1, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_disabled_effects_pass_through() {
        let adjustments = Adjustments {
            brightness_enabled: false,
            watercolor_enabled: false,
            ..Adjustments::default()
        };
        let frame = render(&two_pixels(), &adjustments, Viewport::new(2, 1)).unwrap();
        assert_eq!(DynamicImage::ImageRgb8(frame), two_pixels());
    }

    #[test]
    fn test_frame_matches_viewport() {
        let adjustments = Adjustments {
            watercolor_enabled: true,
            ..Adjustments::default()
        };
        let frame = render(&two_pixels(), &adjustments, Viewport::new(40, 30)).unwrap();
        assert_eq!(frame.dimensions(), (40, 30));
    }

    #[test]
    fn test_watercolor_runs_after_threshold() {
        let original = DynamicImage::ImageRgb8(RgbImage::from_fn(12, 8, |x, y| {
            Rgb([(x * 20) as u8, (y * 30) as u8, 90])
        }));
        let adjustments = Adjustments {
            threshold: 60,
            watercolor_enabled: true,
            ..Adjustments::default()
        };
        let frame = render(&original, &adjustments, Viewport::new(12, 8)).unwrap();

        let expected = watercolor(&apply_threshold(&original, 60, false));
        assert_eq!(frame, expected);
        assert_ne!(frame, apply_threshold(&original, 60, false));
    }

    #[test]
    fn test_original_is_not_modified() {
        let original = two_pixels();
        let before = original.clone();
        let adjustments = Adjustments {
            threshold: 0,
            ..Adjustments::default()
        };
        let _ = render(&original, &adjustments, Viewport::new(5, 5));
        assert_eq!(original, before);
    }
}
