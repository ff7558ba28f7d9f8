//! Quadrant splitting
//!
//! This module crops an image into its four quadrants, optionally keys out a
//! light backdrop, and writes each crop to its destination.

mod quadrant_splitter;
mod report;
mod background;

pub use quadrant_splitter::QuadrantSplitter;
pub use report::{QuadrantOutcome, SplitReport};
pub use background::{BackgroundFilter, DEFAULT_THRESHOLD, DEFAULT_TOLERANCE};
