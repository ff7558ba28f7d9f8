//! Quadrant geometry
//!
//! This module defines the labels, regions and layout of a 2x2 image split,
//! together with the destination table and the crate error type.

pub mod errors;
mod label;
mod region;
mod layout;
mod destinations;
#[cfg(test)]
mod tests;

pub use errors::{SplitError, SplitResult};
pub use label::Label;
pub use region::Region;
pub use layout::{QuadrantMap, MIN_SIDE};
pub use destinations::Destinations;
