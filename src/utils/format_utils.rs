//! Output format utilities
//!
//! Helpers for reasoning about the encoder the `image` crate will pick for a
//! destination path, which is always derived from the file extension.

use std::path::Path;
use image::ImageFormat;

/// Encoder format implied by a path's extension, if any
pub fn output_format(path: &Path) -> Option<ImageFormat> {
    ImageFormat::from_path(path).ok()
}

/// Whether the format for this path keeps an alpha channel
pub fn supports_alpha(path: &Path) -> bool {
    matches!(output_format(path),
             Some(ImageFormat::Png | ImageFormat::Tiff | ImageFormat::WebP | ImageFormat::Qoi))
}

/// Whether the format for this path is lossy
///
/// Unknown extensions count as not lossy; the encoder reports them on save.
pub fn is_lossy(path: &Path) -> bool {
    matches!(output_format(path), Some(ImageFormat::Jpeg | ImageFormat::Avif))
}
