//! Job configuration
//!
//! Split jobs and the built-in filename presets.

mod split_config;
pub mod presets;

pub use split_config::SplitConfig;
pub use presets::{preset, PRESET_NAMES};
