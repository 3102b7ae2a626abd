/// Adjustment parameters for the live preview
///
/// This struct stores every setting that affects how the selected image
/// is drawn. Adjustments are never baked into the originals; the frame
/// is re-rendered from scratch whenever one of them changes. The startup
/// values are stored in the settings file.
use serde::{Deserialize, Serialize};

/// Default brightness cutoff (middle of the 0-255 range)
pub const DEFAULT_THRESHOLD: u8 = 128;

/// All adjustment settings for the preview
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Adjustments {
    /// Brightness cutoff (0 to 255)
    /// - Pixels with a mean channel value above it are "bright"
    pub threshold: u8,

    /// Invert mode
    /// - false = bright pixels are whitened
    /// - true = dark pixels (at or below the threshold) are whitened
    pub invert: bool,

    /// Whether the brightness threshold is applied at all
    pub brightness_enabled: bool,

    /// Whether the watercolor stylization is applied
    pub watercolor_enabled: bool,
}

impl Default for Adjustments {
    /// Thresholding on, everything else off
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            invert: false,
            brightness_enabled: true,
            watercolor_enabled: false,
        }
    }
}
