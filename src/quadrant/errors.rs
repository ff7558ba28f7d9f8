//! Custom error types for quadrant splitting

use std::fmt;
use std::io;
use std::path::PathBuf;

use image::ImageError;

use super::label::Label;

/// Errors raised while planning or performing a quadrant split
#[derive(Debug)]
pub enum SplitError {
    /// Source image could not be read or decoded
    SourceLoad {
        path: PathBuf,
        cause: ImageError,
    },
    /// Source image is too small to be split into four non-empty quadrants
    InvalidDimensions {
        width: u32,
        height: u32,
    },
    /// No destination was supplied for a label
    MissingLabel(Label),
    /// Two labels would be written to the same file
    DuplicateDestination {
        first: Label,
        second: Label,
        path: PathBuf,
    },
    /// A single quadrant could not be written
    DestinationWrite {
        label: Label,
        path: PathBuf,
        cause: ImageError,
    },
    /// Some quadrants were written, others failed
    IncompleteWrite {
        written: Vec<Label>,
        failed: Vec<Label>,
    },
    /// Malformed job configuration
    Config(String),
    /// I/O error
    Io(io::Error),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::SourceLoad { path, cause } => {
                write!(f, "Failed to load source image {}: {}", path.display(), cause)
            },
            SplitError::InvalidDimensions { width, height } => {
                write!(f, "Image of {}x{} is too small to split, both sides must be at least 2 pixels",
                       width, height)
            },
            SplitError::MissingLabel(label) => write!(f, "No destination given for quadrant {}", label),
            SplitError::DuplicateDestination { first, second, path } => {
                write!(f, "Quadrants {} and {} share the destination {}", first, second, path.display())
            },
            SplitError::DestinationWrite { label, path, cause } => {
                write!(f, "Failed to write {} quadrant to {}: {}", label, path.display(), cause)
            },
            SplitError::IncompleteWrite { written, failed } => {
                write!(f, "Split incomplete: written [{}], failed [{}]",
                       join_labels(written), join_labels(failed))
            },
            SplitError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SplitError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::SourceLoad { cause, .. } => Some(cause),
            SplitError::DestinationWrite { cause, .. } => Some(cause),
            SplitError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SplitError {
    fn from(error: io::Error) -> Self {
        SplitError::Io(error)
    }
}

fn join_labels(labels: &[Label]) -> String {
    labels.iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for split operations
pub type SplitResult<T> = Result<T, SplitError>;
