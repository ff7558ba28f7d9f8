//! String utility functions
//!
//! Parsing of `LABEL=FILE` assignments used by the CLI and job files.

use std::path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::quadrant::{Label, SplitError, SplitResult};

lazy_static! {
    static ref ASSIGNMENT: Regex = Regex::new(r"^\s*([A-Za-z_-]+)\s*=\s*(\S(?:.*\S)?)\s*$")
        .expect("assignment pattern is valid");
}

/// Parse a `LABEL=FILE` assignment
///
/// # Arguments
/// * `text` - Assignment such as `top-left=catcher.png`
///
/// # Returns
/// The label and the (trimmed) filename, or a `Config` error
pub fn parse_assignment(text: &str) -> SplitResult<(Label, String)> {
    let captures = ASSIGNMENT.captures(text)
        .ok_or_else(|| SplitError::Config(format!("Expected LABEL=FILE, got '{}'", text)))?;

    let label = captures[1].parse::<Label>().map_err(SplitError::Config)?;
    Ok((label, captures[2].to_string()))
}

/// Insert a suffix between a filename's stem and its extension
///
/// `catcher.png` with `_full` becomes `catcher_full.png`. Only the last path
/// component is considered, so dots in directory names are left alone.
pub fn with_stem_suffix(filename: &str, suffix: &str) -> String {
    let name_start = filename.rfind(path::is_separator)
        .map(|sep| sep + 1)
        .unwrap_or(0);

    match filename[name_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let dot = name_start + dot;
            format!("{}{}{}", &filename[..dot], suffix, &filename[dot..])
        },
        _ => format!("{}{}", filename, suffix),
    }
}
