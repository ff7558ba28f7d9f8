//! Named filename tables
//!
//! `positions` reproduces the baseball roster artwork the splitter was first
//! written for: a 2x2 sheet holding catcher, outfielder, infielder and
//! pitcher, in that order.

use std::collections::BTreeMap;

use crate::quadrant::{Label, SplitError, SplitResult};
use crate::utils::string_utils::with_stem_suffix;

/// Names of all built-in presets
pub const PRESET_NAMES: [&str; 3] = ["default", "positions", "positions-full"];

/// Filename table for a named preset
///
/// # Arguments
/// * `name` - One of [`PRESET_NAMES`]
///
/// # Returns
/// A complete Label -> filename table, or a `Config` error for unknown names
pub fn preset(name: &str) -> SplitResult<BTreeMap<Label, String>> {
    match name.trim().to_lowercase().as_str() {
        "default" => Ok(default_filenames()),
        "positions" => Ok(positions()),
        "positions-full" => Ok(positions()
            .into_iter()
            .map(|(label, name)| (label, with_stem_suffix(&name, "_full")))
            .collect()),
        other => Err(SplitError::Config(format!(
            "Unknown preset '{}', expected one of: {}", other, PRESET_NAMES.join(", ")))),
    }
}

/// `top-left.png`, `top-right.png`, ...
pub fn default_filenames() -> BTreeMap<Label, String> {
    Label::ALL.iter()
        .map(|label| (*label, format!("{}.png", label.as_str())))
        .collect()
}

fn positions() -> BTreeMap<Label, String> {
    [
        (Label::TopLeft, "catcher.png"),
        (Label::TopRight, "outfielder.png"),
        (Label::BottomLeft, "infielder.png"),
        (Label::BottomRight, "pitcher.png"),
    ]
    .into_iter()
    .map(|(label, name)| (label, name.to_string()))
    .collect()
}
