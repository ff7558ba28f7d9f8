pub mod quadrant;
pub mod splitter;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::QuadKit;

pub use quadrant::{Destinations, Label, QuadrantMap, Region, SplitError, SplitResult};
pub use splitter::{BackgroundFilter, QuadrantOutcome, QuadrantSplitter, SplitReport};
pub use config::SplitConfig;
