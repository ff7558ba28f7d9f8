//! Output paths for the four quadrants

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::errors::{SplitError, SplitResult};
use super::label::Label;

/// Mapping from quadrant label to the file the crop is written to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Destinations {
    paths: BTreeMap<Label, PathBuf>,
}

impl Destinations {
    /// Create an empty mapping
    pub fn new() -> Self {
        Destinations::default()
    }

    /// Resolve a filename table against a destination directory
    ///
    /// Labels absent from `filenames` stay absent; [`Destinations::validate`]
    /// reports them.
    pub fn resolve<S: AsRef<str>>(directory: &Path, filenames: &BTreeMap<Label, S>) -> Self {
        let paths = filenames.iter()
            .map(|(label, name)| (*label, directory.join(name.as_ref())))
            .collect();

        Destinations { paths }
    }

    /// Set the output path for a label, replacing any previous one
    pub fn insert(&mut self, label: Label, path: impl Into<PathBuf>) -> &mut Self {
        self.paths.insert(label, path.into());
        self
    }

    /// Builder-style variant of [`Destinations::insert`]
    pub fn with(mut self, label: Label, path: impl Into<PathBuf>) -> Self {
        self.insert(label, path);
        self
    }

    /// Output path for a label
    pub fn path(&self, label: Label) -> SplitResult<&Path> {
        self.paths.get(&label)
            .map(PathBuf::as_path)
            .ok_or(SplitError::MissingLabel(label))
    }

    /// Check that every label has a destination
    ///
    /// Fails with the first missing label in enumeration order, then with
    /// the first pair of labels sharing an output path.
    pub fn validate(&self) -> SplitResult<()> {
        if let Some(label) = Label::ALL.iter().find(|label| !self.paths.contains_key(label)) {
            return Err(SplitError::MissingLabel(*label));
        }

        let mut seen: Vec<(Label, &Path)> = Vec::with_capacity(self.paths.len());
        for (label, path) in self.iter() {
            if let Some((first, _)) = seen.iter().find(|(_, other)| *other == path) {
                return Err(SplitError::DuplicateDestination {
                    first: *first,
                    second: label,
                    path: path.to_path_buf(),
                });
            }
            seen.push((label, path));
        }

        Ok(())
    }

    /// Iterate over (label, path) pairs in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Label, &Path)> {
        self.paths.iter().map(|(label, path)| (*label, path.as_path()))
    }
}

impl FromIterator<(Label, PathBuf)> for Destinations {
    fn from_iter<I: IntoIterator<Item = (Label, PathBuf)>>(iter: I) -> Self {
        Destinations { paths: iter.into_iter().collect() }
    }
}
