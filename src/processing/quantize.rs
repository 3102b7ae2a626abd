/// Median-cut palette quantization
///
/// Builds a palette of at most N colors from an RGB image by repeatedly
/// splitting the color box that holds the most pixels along its widest
/// channel, at the pixel-weighted median. Each palette entry is the
/// pixel-weighted mean of the colors in its box.
use image::{Rgb, RgbImage};
use std::collections::HashMap;

/// A color and the number of pixels that have it
type Bin = ([u8; 3], u32);

/// Quantized palette plus a lookup from every source color to its entry
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
    lookup: HashMap<[u8; 3], usize>,
}

impl Palette {
    /// Palette entries, in box order
    #[cfg(test)]
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Palette index for a color seen during quantization
    pub fn index_of(&self, color: [u8; 3]) -> Option<usize> {
        self.lookup.get(&color).copied()
    }

    /// Map every pixel of `image` to its palette color
    ///
    /// Colors that were not part of the quantized image fall back to the
    /// nearest palette entry by squared RGB distance.
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let mut out = image.clone();
        for pixel in out.pixels_mut() {
            let index = self
                .index_of(pixel.0)
                .unwrap_or_else(|| self.nearest(pixel.0));
            if let Some(color) = self.colors.get(index) {
                *pixel = Rgb(*color);
            }
        }
        out
    }

    fn nearest(&self, color: [u8; 3]) -> usize {
        self.colors
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| distance_sq(**c, color))
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as i32 - y as i32;
            (d * d) as u32
        })
        .sum()
}

/// A box of histogram bins in RGB space
#[derive(Debug)]
struct ColorBox {
    bins: Vec<Bin>,
    pixels: u64,
}

impl ColorBox {
    fn new(bins: Vec<Bin>) -> Self {
        let pixels = bins.iter().map(|(_, n)| *n as u64).sum();
        Self { bins, pixels }
    }

    /// Channel with the largest value range, and that range
    fn widest_channel(&self) -> (usize, u8) {
        let mut best = (0, 0);
        for channel in 0..3 {
            let (lo, hi) = self.bins.iter().fold((u8::MAX, u8::MIN), |(lo, hi), (c, _)| {
                (lo.min(c[channel]), hi.max(c[channel]))
            });
            let range = hi.saturating_sub(lo);
            if range > best.1 {
                best = (channel, range);
            }
        }
        best
    }

    /// Split at the pixel-weighted median of the widest channel
    fn split(mut self) -> (ColorBox, ColorBox) {
        let (channel, _) = self.widest_channel();
        self.bins.sort_unstable_by_key(|(c, _)| (c[channel], c[0], c[1], c[2]));

        let half = self.pixels / 2;
        let mut running = 0u64;
        let mut cut = 1;
        for (i, (_, n)) in self.bins.iter().enumerate() {
            running += *n as u64;
            if running > half {
                cut = i.max(1);
                break;
            }
        }
        // Both halves must be non-empty
        let cut = cut.min(self.bins.len() - 1);

        let upper = self.bins.split_off(cut);
        (ColorBox::new(self.bins), ColorBox::new(upper))
    }

    fn mean_color(&self) -> [u8; 3] {
        let mut sums = [0u64; 3];
        for (color, n) in &self.bins {
            for channel in 0..3 {
                sums[channel] += color[channel] as u64 * *n as u64;
            }
        }
        let total = self.pixels.max(1);
        // Round half up
        sums.map(|s| ((s + total / 2) / total).min(255) as u8)
    }
}

/// Build a palette of at most `max_colors` entries for `image`
///
/// If the image has no more unique colors than `max_colors`, the palette
/// holds exactly those colors and `Palette::apply` is the identity.
pub fn quantize(image: &RgbImage, max_colors: usize) -> Palette {
    let max_colors = max_colors.max(1);

    let mut histogram: HashMap<[u8; 3], u32> = HashMap::new();
    for pixel in image.pixels() {
        *histogram.entry(pixel.0).or_insert(0) += 1;
    }

    let mut bins: Vec<Bin> = histogram.into_iter().collect();
    // HashMap order is random; keep the result deterministic
    bins.sort_unstable_by_key(|(c, _)| *c);

    let mut boxes = vec![ColorBox::new(bins)];
    while boxes.len() < max_colors {
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.bins.len() > 1)
            .max_by_key(|(i, b)| (b.pixels, std::cmp::Reverse(*i)))
            .map(|(i, _)| i);

        let Some(index) = candidate else {
            break;
        };
        let (lower, upper) = boxes.swap_remove(index).split();
        boxes.push(lower);
        boxes.push(upper);
    }

    let mut colors = Vec::with_capacity(boxes.len());
    let mut lookup = HashMap::new();
    for color_box in &boxes {
        // Only the initial box of an empty image can be empty
        if color_box.bins.is_empty() {
            continue;
        }
        let entry = colors.len();
        colors.push(color_box.mean_color());
        for (color, _) in &color_box.bins {
            lookup.insert(*color, entry);
        }
    }

    Palette { colors, lookup }
}
