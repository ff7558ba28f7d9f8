//! Quadrant labels
//!
//! The four quadrants of a split are identified by a closed enum rather than
//! free-form strings. Textual names only appear at the edges (CLI arguments
//! and job files) and are parsed through [`Label::from_str`].

use std::fmt;
use std::str::FromStr;

/// One of the four quadrants of a 2x2 split
///
/// Variants are declared in enumeration order (top-left, top-right,
/// bottom-left, bottom-right), which is also their `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Label {
    /// All labels in enumeration order
    pub const ALL: [Label; 4] = [
        Label::TopLeft,
        Label::TopRight,
        Label::BottomLeft,
        Label::BottomRight,
    ];

    /// Canonical kebab-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::TopLeft => "top-left",
            Label::TopRight => "top-right",
            Label::BottomLeft => "bottom-left",
            Label::BottomRight => "bottom-right",
        }
    }

    /// Whether the quadrant sits in the right column
    pub fn is_right(&self) -> bool {
        matches!(self, Label::TopRight | Label::BottomRight)
    }

    /// Whether the quadrant sits in the bottom row
    pub fn is_bottom(&self) -> bool {
        matches!(self, Label::BottomLeft | Label::BottomRight)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = String;

    /// Accepts `top-left`, `top_left`, `topLeft`, `TopLeft` and `tl` style names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "topleft" | "tl" => Ok(Label::TopLeft),
            "topright" | "tr" => Ok(Label::TopRight),
            "bottomleft" | "bl" => Ok(Label::BottomLeft),
            "bottomright" | "br" => Ok(Label::BottomRight),
            _ => Err(format!("Unknown quadrant label: '{}'", s)),
        }
    }
}
