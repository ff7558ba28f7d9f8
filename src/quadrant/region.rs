//! Region structure for defining a crop area
//!
//! A Region is a half-open pixel rectangle `[x, x + width) x [y, y + height)`
//! in the usual image coordinate system where (0,0) is the top-left corner.

/// Rectangular crop area in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region from its origin and size
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Create a region from its corner coordinates `(x0, y0, x1, y1)`
    ///
    /// `x1` and `y1` are exclusive. Callers must ensure `x0 <= x1` and `y0 <= y1`.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Region {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the pixel at (px, py) lies inside the region
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.end_x() && py >= self.y && py < self.end_y()
    }

    /// Whether two regions share at least one pixel
    pub fn overlaps(&self, other: &Region) -> bool {
        self.x < other.end_x() && other.x < self.end_x()
            && self.y < other.end_y() && other.y < self.end_y()
    }
}
