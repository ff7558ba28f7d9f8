//! Background keying
//!
//! Sprite sheets are often exported over a light gray checkerboard instead of
//! real transparency. This module turns such backdrop pixels transparent
//! after a quadrant has been cropped.

use image::{DynamicImage, Rgba};

/// Default minimum value of every channel for a backdrop pixel
pub const DEFAULT_THRESHOLD: u8 = 230;

/// Default maximum pairwise channel difference for a backdrop pixel
pub const DEFAULT_TOLERANCE: u8 = 10;

/// Makes bright, near-gray pixels transparent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundFilter {
    /// Every channel must be at least this bright
    pub threshold: u8,
    /// Pairwise channel differences must stay below this
    pub tolerance: u8,
}

impl Default for BackgroundFilter {
    fn default() -> Self {
        BackgroundFilter {
            threshold: DEFAULT_THRESHOLD,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl BackgroundFilter {
    pub fn new(threshold: u8, tolerance: u8) -> Self {
        BackgroundFilter { threshold, tolerance }
    }

    /// Whether a pixel belongs to the backdrop
    pub fn is_background(&self, pixel: &Rgba<u8>) -> bool {
        let [r, g, b, _] = pixel.0;
        let near_gray = r.abs_diff(g) < self.tolerance
            && g.abs_diff(b) < self.tolerance
            && r.abs_diff(b) < self.tolerance;
        let bright = r >= self.threshold && g >= self.threshold && b >= self.threshold;

        near_gray && bright
    }

    /// Apply the filter, returning an RGBA image
    ///
    /// Backdrop pixels get alpha 0 and keep their color channels; all other
    /// pixels are left untouched.
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        let mut rgba = image.to_rgba8();

        for pixel in rgba.pixels_mut() {
            if self.is_background(pixel) {
                pixel.0[3] = 0;
            }
        }

        DynamicImage::ImageRgba8(rgba)
    }
}
