/// Preview area showing the rendered frame
use iced::widget::image::Handle;
use iced::widget::{container, text, Image};
use iced::{ContentFit, Element, Length, Size};
use image::{DynamicImage, RgbImage};

use crate::processing::Viewport;
use crate::Message;

/// Space between the preview and the window edges
pub const PADDING: f32 = 10.0;

/// Physical pixel size available to the preview for a logical window size
pub fn viewport_for(window: Size, sidebar_width: f32, scale_factor: f32) -> Viewport {
    let width = (window.width - sidebar_width - 2.0 * PADDING).max(0.0) * scale_factor;
    let height = (window.height - 2.0 * PADDING).max(0.0) * scale_factor;
    Viewport::new(width.floor() as u32, height.floor() as u32)
}

/// Upload a rendered RGB frame as an iced image handle
pub fn frame_handle(frame: RgbImage) -> Handle {
    let (width, height) = frame.dimensions();
    let rgba = DynamicImage::ImageRgb8(frame).into_rgba8();
    Handle::from_rgba(width, height, rgba.into_raw())
}

pub fn view(frame: Option<&Handle>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match frame {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Fill)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text("Select an image from the list").size(16).into(),
    };

    container(content)
        .padding(PADDING)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_subtracts_sidebar_and_padding() {
        let viewport = viewport_for(Size::new(1024.0, 768.0), 220.0, 1.0);
        assert_eq!(viewport, Viewport::new(784, 748));
    }

    #[test]
    fn test_viewport_in_physical_pixels() {
        let viewport = viewport_for(Size::new(1024.0, 768.0), 220.0, 2.0);
        assert_eq!(viewport, Viewport::new(1568, 1496));

        let viewport = viewport_for(Size::new(1024.0, 768.0), 220.0, 1.25);
        assert_eq!(viewport, Viewport::new(980, 935));
    }

    #[test]
    fn test_tiny_window_gives_empty_viewport() {
        let viewport = viewport_for(Size::new(100.0, 5.0), 220.0, 2.0);
        assert!(viewport.is_empty());
    }
}
