//! Split outcome reporting
//!
//! A split never silently drops a quadrant: every label ends up either
//! written or failed, and the report keeps them in enumeration order.

use std::path::{Path, PathBuf};

use crate::quadrant::{Label, SplitError, SplitResult};

/// What happened to one quadrant
#[derive(Debug)]
pub enum QuadrantOutcome {
    /// The crop was encoded and written
    Written {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    /// Writing failed; always a `SplitError::DestinationWrite`
    Failed(SplitError),
}

impl QuadrantOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, QuadrantOutcome::Written { .. })
    }
}

/// Per-label results of a split
#[derive(Debug)]
pub struct SplitReport {
    outcomes: Vec<(Label, QuadrantOutcome)>,
}

impl SplitReport {
    pub(crate) fn new(mut outcomes: Vec<(Label, QuadrantOutcome)>) -> Self {
        outcomes.sort_by_key(|(label, _)| *label);
        SplitReport { outcomes }
    }

    /// All outcomes in enumeration order
    pub fn outcomes(&self) -> &[(Label, QuadrantOutcome)] {
        &self.outcomes
    }

    /// Outcome for one label
    pub fn outcome(&self, label: Label) -> Option<&QuadrantOutcome> {
        self.outcomes.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, outcome)| outcome)
    }

    /// Labels whose quadrant was written, with their paths
    pub fn written(&self) -> Vec<(Label, &Path)> {
        self.outcomes.iter()
            .filter_map(|(label, outcome)| match outcome {
                QuadrantOutcome::Written { path, .. } => Some((*label, path.as_path())),
                QuadrantOutcome::Failed(_) => None,
            })
            .collect()
    }

    /// Labels whose quadrant failed, with the error
    pub fn failed(&self) -> Vec<(Label, &SplitError)> {
        self.outcomes.iter()
            .filter_map(|(label, outcome)| match outcome {
                QuadrantOutcome::Failed(e) => Some((*label, e)),
                QuadrantOutcome::Written { .. } => None,
            })
            .collect()
    }

    /// Whether all four quadrants were written
    pub fn is_complete(&self) -> bool {
        self.outcomes.len() == Label::ALL.len()
            && self.outcomes.iter().all(|(_, outcome)| outcome.is_written())
    }

    /// Turn any failed quadrant into an `IncompleteWrite` error
    pub fn ensure_complete(&self) -> SplitResult<()> {
        if self.is_complete() {
            return Ok(());
        }

        Err(SplitError::IncompleteWrite {
            written: self.written().into_iter().map(|(label, _)| label).collect(),
            failed: self.failed().into_iter().map(|(label, _)| label).collect(),
        })
    }

    /// One line per quadrant, suitable for console output
    pub fn summary(&self) -> String {
        let mut result = String::new();
        for (label, outcome) in &self.outcomes {
            match outcome {
                QuadrantOutcome::Written { path, width, height } => {
                    result.push_str(&format!("  {:<13} {}x{} -> {}\n", label.as_str(), width, height, path.display()));
                },
                QuadrantOutcome::Failed(e) => {
                    result.push_str(&format!("  {:<13} FAILED: {}\n", label.as_str(), e));
                },
            }
        }
        result
    }
}
