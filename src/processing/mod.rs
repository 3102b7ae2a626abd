/// Image processing module
///
/// This module handles:
/// - Brightness thresholding with optional inversion (brightness.rs)
/// - The watercolor stylization pipeline (watercolor.rs)
/// - Median-cut palette quantization (quantize.rs)
/// - Saturation and edge enhancement filters (enhance.rs)
/// - Rendering an original image into a viewport-sized frame (render.rs)
///
/// All functions here are pure: they take an image by reference and
/// return a new one. Originals are never modified.

pub mod brightness;
pub mod enhance;
pub mod quantize;
pub mod render;
pub mod watercolor;

pub use render::{render, Viewport};
