/// Watercolor stylization
///
/// A fixed chain of off-the-shelf filters:
/// 1. Gaussian blur to soften the image
/// 2. Median-cut quantization to a small palette
/// 3. Back to full RGB
/// 4. Saturation boost for more vibrant washes
/// 5. Edge enhancement to mimic pigment pooling at edges
/// 6. A second mild blur to soften those edges again
use image::{imageops, RgbImage};

use super::enhance::{edge_enhance, saturate};
use super::quantize::quantize;

/// Gaussian blur sigma used for both blur passes
pub const BLUR_SIGMA: f32 = 1.0;
/// Number of palette colors after quantization
pub const PALETTE_COLORS: usize = 64;
/// Saturation multiplier
pub const SATURATION: f32 = 1.5;

/// Apply the watercolor effect to an RGB image
pub fn watercolor(image: &RgbImage) -> RgbImage {
    let blurred = imageops::blur(image, BLUR_SIGMA);

    let palette = quantize(&blurred, PALETTE_COLORS);
    log::debug!("Watercolor palette: {} colors", palette.len());
    let posterized = palette.apply(&blurred);

    let vivid = saturate(&posterized, SATURATION);
    let edged = edge_enhance(&vivid);

    imageops::blur(&edged, BLUR_SIGMA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn sample() -> RgbImage {
        RgbImage::from_fn(24, 16, |x, y| {
            Rgb([(x * 10) as u8, (y * 15) as u8, ((x * y) % 256) as u8])
        })
    }

    #[test]
    fn test_dimensions_preserved() {
        let out = watercolor(&sample());
        assert_eq!(out.dimensions(), (24, 16));
    }

    #[test]
    fn test_deterministic() {
        let img = sample();
        assert_eq!(watercolor(&img), watercolor(&img));
    }

    #[test]
    fn test_original_untouched() {
        let img = sample();
        let before = img.clone();
        let _ = watercolor(&img);
        assert_eq!(img, before);
    }

    #[test]
    fn test_pipeline_constants() {
        assert_eq!(BLUR_SIGMA, 1.0);
        assert_eq!(PALETTE_COLORS, 64);
        assert_eq!(SATURATION, 1.5);
    }

    #[test]
    fn test_varied_image_is_changed() {
        let img = sample();
        assert_ne!(watercolor(&img), img);
    }

    #[test]
    fn test_matches_steps_in_order() {
        let img = sample();

        let blurred = imageops::blur(&img, 1.0);
        let posterized = quantize(&blurred, 64).apply(&blurred);
        let vivid = saturate(&posterized, 1.5);
        let expected = imageops::blur(&edge_enhance(&vivid), 1.0);

        assert_eq!(watercolor(&img), expected);
    }

    #[test]
    fn test_final_blur_softens_edges() {
        // Stripes keep hard edges after edge enhancement, so the last blur shows
        let img = RgbImage::from_fn(32, 32, |x, _| {
            if (x / 4) % 2 == 0 {
                Rgb([220, 40, 40])
            } else {
                Rgb([30, 60, 200])
            }
        });
        let out = watercolor(&img);

        let blurred = imageops::blur(&img, BLUR_SIGMA);
        let without_second_blur = edge_enhance(&saturate(
            &quantize(&blurred, PALETTE_COLORS).apply(&blurred),
            SATURATION,
        ));
        assert_ne!(out, without_second_blur);
        assert_eq!(out, imageops::blur(&without_second_blur, BLUR_SIGMA));
    }

    #[test]
    fn test_flat_gray_stays_gray() {
        let img = RgbImage::from_pixel(10, 10, Rgb([128, 128, 128]));
        let out = watercolor(&img);
        for pixel in out.pixels() {
            let [r, g, b] = pixel.0;
            assert_eq!(r, g);
            assert_eq!(g, b);
        }
    }
}
