//! Quadrant layout computation
//!
//! Derives the four crop regions of an image by halving both axes with
//! integer floor division. For odd sizes the left column and top row are one
//! pixel smaller than their counterparts; nothing is redistributed.

use log::debug;

use super::errors::{SplitError, SplitResult};
use super::label::Label;
use super::region::Region;

/// Smallest side length that still yields non-empty quadrants
pub const MIN_SIDE: u32 = 2;

/// The four quadrant regions of one image, indexed by label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantMap {
    width: u32,
    height: u32,
    regions: [Region; 4],
}

impl QuadrantMap {
    /// Compute the quadrant regions for an image of the given size
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// The quadrant map, or `InvalidDimensions` if either side is below 2 pixels
    pub fn from_dimensions(width: u32, height: u32) -> SplitResult<Self> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(SplitError::InvalidDimensions { width, height });
        }

        let half_width = width / 2;
        let half_height = height / 2;

        let regions = Label::ALL.map(|label| {
            let (x0, x1) = if label.is_right() { (half_width, width) } else { (0, half_width) };
            let (y0, y1) = if label.is_bottom() { (half_height, height) } else { (0, half_height) };
            Region::from_corners(x0, y0, x1, y1)
        });

        debug!("Computed quadrants for {}x{} (split at x={}, y={})",
               width, height, half_width, half_height);

        Ok(QuadrantMap { width, height, regions })
    }

    /// Width of the source image
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the source image
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Region for a label
    pub fn region(&self, label: Label) -> Region {
        self.regions[label as usize]
    }

    /// Iterate over (label, region) pairs in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Label, Region)> + '_ {
        Label::ALL.iter().map(move |&label| (label, self.region(label)))
    }
}
