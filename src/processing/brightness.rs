/// Brightness threshold transform
///
/// Pixels whose mean channel value lies on the "bright" side of the
/// threshold are replaced with pure white; all other pixels keep their
/// exact original color.
use image::{DynamicImage, Rgb, RgbImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Apply the brightness threshold to an image
///
/// # Arguments
/// * `image` - Source image (any color type, converted to RGB first)
/// * `threshold` - Brightness cutoff in [0, 255]
/// * `invert` - When false, pixels brighter than `threshold` become white.
///   When true, pixels at or below `threshold` become white.
///
/// # Returns
/// A new RGB image with the same dimensions as `image`
pub fn apply_threshold(image: &DynamicImage, threshold: u8, invert: bool) -> RgbImage {
    let mut out = image.to_rgb8();
    for pixel in out.pixels_mut() {
        if is_bright(pixel, threshold) != invert {
            *pixel = WHITE;
        }
    }
    out
}

/// True if the unweighted channel mean is strictly greater than `threshold`
///
/// Compares `r + g + b > 3 * threshold` so the mean never has to be rounded.
#[inline]
pub fn is_bright(pixel: &Rgb<u8>, threshold: u8) -> bool {
    let [r, g, b] = pixel.0;
    let sum = r as u32 + g as u32 + b as u32;
    sum > 3 * threshold as u32
}
