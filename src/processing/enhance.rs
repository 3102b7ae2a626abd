/// Color and edge enhancement filters
///
/// Both filters work in 8-bit integer space: luma uses 16.16 fixed point
/// and the 3x3 kernel sum is divided with rounding.
use image::{Rgb, RgbImage};

/// 3x3 edge enhancement kernel (row-major), divided by `EDGE_ENHANCE_SCALE`
const EDGE_ENHANCE_KERNEL: [i32; 9] = [-1, -1, -1, -1, 10, -1, -1, -1, -1];
const EDGE_ENHANCE_SCALE: i32 = 2;

/// ITU-R 601-2 luma in 16.16 fixed point, rounded
#[inline]
fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Scale color saturation by `factor`
///
/// Each channel is pushed away from (factor > 1) or toward (factor < 1)
/// the pixel's grayscale value: `out = gray + factor * (in - gray)`,
/// truncated and clamped to [0, 255]. A factor of 1.0 is the identity and
/// 0.0 yields the grayscale image.
pub fn saturate(image: &RgbImage, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let gray = luma(pixel) as f32;
        for channel in pixel.0.iter_mut() {
            let value = gray + factor * (*channel as f32 - gray);
            *channel = if value <= 0.0 {
                0
            } else if value >= 255.0 {
                255
            } else {
                value as u8
            };
        }
    }
    out
}

/// Sharpen edges with the 3x3 edge enhancement kernel
///
/// Border rows and columns are copied from the source unchanged.
pub fn edge_enhance(image: &RgbImage) -> RgbImage {
    filter3x3(image, &EDGE_ENHANCE_KERNEL, EDGE_ENHANCE_SCALE)
}

/// Integer 3x3 convolution with rounding, interior pixels only
///
/// Border pixels are copied, not edge-clamped as `imageproc::filter::filter3x3` does.
fn filter3x3(image: &RgbImage, kernel: &[i32; 9], scale: i32) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut out = image.clone();
    if width < 3 || height < 3 {
        return out;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut sums = [0i32; 3];
            for ky in 0..3u32 {
                for kx in 0..3u32 {
                    let weight = kernel[(ky * 3 + kx) as usize];
                    let src = image.get_pixel(x + kx - 1, y + ky - 1);
                    for channel in 0..3 {
                        sums[channel] += weight * src.0[channel] as i32;
                    }
                }
            }
            let pixel = Rgb(sums.map(|s| round_div(s, scale).clamp(0, 255) as u8));
            out.put_pixel(x, y, pixel);
        }
    }
    out
}

/// Division rounding half away from zero
fn round_div(value: i32, divisor: i32) -> i32 {
    if value >= 0 {
        (value + divisor / 2) / divisor
    } else {
        (value - divisor / 2) / divisor
    }
}
