//! Split job configuration
//!
//! A job names one source image, the directory the quadrants go to and the
//! file name for each quadrant. Jobs are built in code, from CLI arguments,
//! or from a TOML file:
//!
//! ```toml
//! source = "sheet.png"
//! destination_dir = "public/images/positions"
//! preset = "positions"
//! parallel = false
//!
//! [filenames]
//! top-left = "catcher.png"
//!
//! [background]
//! threshold = 230
//! tolerance = 10
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::quadrant::{Destinations, Label, SplitError, SplitResult};
use crate::splitter::{BackgroundFilter, DEFAULT_THRESHOLD, DEFAULT_TOLERANCE};
use crate::utils::string_utils::parse_assignment;

use super::presets;

/// Everything needed to run one split
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// Image to split
    pub source: PathBuf,
    /// Directory the quadrant files are written to
    pub destination_dir: PathBuf,
    /// File name for each quadrant, relative to `destination_dir`
    pub filenames: BTreeMap<Label, String>,
    /// Background keying, disabled when `None`
    pub background: Option<BackgroundFilter>,
    /// Write quadrants concurrently
    pub parallel: bool,
    /// Draw a progress bar while writing
    pub show_progress: bool,
}

impl SplitConfig {
    /// Create a job with the default filename table
    pub fn new(source: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        SplitConfig {
            source: source.into(),
            destination_dir: destination_dir.into(),
            filenames: presets::default_filenames(),
            background: None,
            parallel: false,
            show_progress: false,
        }
    }

    /// Replace the whole filename table
    pub fn set_filenames(mut self, filenames: BTreeMap<Label, String>) -> Self {
        self.filenames = filenames;
        self
    }

    /// Replace the filename table with a named preset
    pub fn set_preset(mut self, name: &str) -> SplitResult<Self> {
        self.filenames = presets::preset(name)?;
        Ok(self)
    }

    /// Set the file name for a single quadrant
    pub fn set_filename(mut self, label: Label, filename: impl Into<String>) -> Self {
        self.filenames.insert(label, filename.into());
        self
    }

    /// Apply a `LABEL=FILE` assignment
    pub fn apply_assignment(self, assignment: &str) -> SplitResult<Self> {
        let (label, filename) = parse_assignment(assignment)?;
        Ok(self.set_filename(label, filename))
    }

    /// Remove a quadrant from the table
    pub fn remove_filename(mut self, label: Label) -> Self {
        self.filenames.remove(&label);
        self
    }

    /// Set or clear background keying
    pub fn set_background(mut self, background: Option<BackgroundFilter>) -> Self {
        self.background = background;
        self
    }

    /// Write quadrants concurrently
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Draw a progress bar while writing
    pub fn set_show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Output paths for this job
    pub fn destinations(&self) -> Destinations {
        Destinations::resolve(&self.destination_dir, &self.filenames)
    }

    /// Load a job from a TOML file
    ///
    /// Relative `source` and `destination_dir` values are kept as written,
    /// i.e. relative to the working directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SplitResult<Self> {
        let path = path.as_ref();
        debug!("Reading job file {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a job from TOML text
    pub fn from_toml_str(content: &str) -> SplitResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| SplitError::Config(format!("Failed to parse TOML: {}", e)))?;

        let source = required_str(&toml_value, "source")?;
        let destination_dir = optional_str(&toml_value, "destination_dir")?.unwrap_or(".");

        let mut config = SplitConfig::new(source, destination_dir);

        if let Some(name) = optional_str(&toml_value, "preset")? {
            config = config.set_preset(name)?;
        }

        if let Some(value) = toml_value.get("filenames") {
            let table = value.as_table()
                .ok_or_else(|| SplitError::Config("'filenames' must be a table".to_string()))?;
            for (key, name) in table {
                let label = key.parse::<Label>().map_err(SplitError::Config)?;
                let name = name.as_str()
                    .ok_or_else(|| SplitError::Config(format!("Filename for '{}' must be a string", key)))?;
                config = config.set_filename(label, name);
            }
        }

        if let Some(value) = toml_value.get("background") {
            config.background = Some(parse_background(value)?);
        }

        if let Some(value) = toml_value.get("parallel") {
            config.parallel = value.as_bool()
                .ok_or_else(|| SplitError::Config("'parallel' must be a boolean".to_string()))?;
        }

        Ok(config)
    }
}

fn required_str<'v>(value: &'v toml::Value, key: &str) -> SplitResult<&'v str> {
    optional_str(value, key)?
        .ok_or_else(|| SplitError::Config(format!("Missing required key '{}'", key)))
}

fn optional_str<'v>(value: &'v toml::Value, key: &str) -> SplitResult<Option<&'v str>> {
    match value.get(key) {
        None => Ok(None),
        Some(v) => v.as_str()
            .map(Some)
            .ok_or_else(|| SplitError::Config(format!("'{}' must be a string", key))),
    }
}

/// `background = true` or a table with optional `threshold` / `tolerance`
fn parse_background(value: &toml::Value) -> SplitResult<BackgroundFilter> {
    if let Some(enabled) = value.as_bool() {
        return if enabled {
            Ok(BackgroundFilter::default())
        } else {
            Err(SplitError::Config("Omit 'background' to disable keying".to_string()))
        };
    }

    let table = value.as_table()
        .ok_or_else(|| SplitError::Config("'background' must be a table or true".to_string()))?;

    let threshold = channel_value(table.get("threshold"), "threshold", DEFAULT_THRESHOLD)?;
    let tolerance = channel_value(table.get("tolerance"), "tolerance", DEFAULT_TOLERANCE)?;

    Ok(BackgroundFilter::new(threshold, tolerance))
}

fn channel_value(value: Option<&toml::Value>, key: &str, default: u8) -> SplitResult<u8> {
    let Some(value) = value else {
        return Ok(default);
    };

    value.as_integer()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| SplitError::Config(format!("background.{} must be an integer in 0..=255", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_job() {
        let config = SplitConfig::from_toml_str(r#"source = "sheet.png""#).unwrap();
        assert_eq!(config.source, PathBuf::from("sheet.png"));
        assert_eq!(config.destination_dir, PathBuf::from("."));
        assert_eq!(config.filenames, presets::default_filenames());
        assert!(config.background.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_full_job() {
        let config = SplitConfig::from_toml_str(r#"
            source = "sheet.png"
            destination_dir = "public/images/positions"
            preset = "positions"
            parallel = true

            [filenames]
            bottomRight = "ace.png"

            [background]
            threshold = 220
        "#).unwrap();

        assert_eq!(config.destination_dir, PathBuf::from("public/images/positions"));
        assert_eq!(config.filenames[&Label::TopLeft], "catcher.png");
        assert_eq!(config.filenames[&Label::BottomRight], "ace.png");
        assert_eq!(config.background, Some(BackgroundFilter::new(220, DEFAULT_TOLERANCE)));
        assert!(config.parallel);

        let destinations = config.destinations();
        assert_eq!(destinations.path(Label::TopRight).unwrap(),
                   Path::new("public/images/positions/outfielder.png"));
    }

    #[test]
    fn test_background_shorthand() {
        let config = SplitConfig::from_toml_str("source = \"a.png\"\nbackground = true").unwrap();
        assert_eq!(config.background, Some(BackgroundFilter::default()));
    }

    #[test]
    fn test_config_errors() {
        let cases = [
            "destination_dir = \"out\"",
            "source = 3",
            "source = \"a.png\"\npreset = \"nope\"",
            "source = \"a.png\"\n[filenames]\ncentre = \"c.png\"",
            "source = \"a.png\"\n[background]\nthreshold = 300",
            "source = \"a.png\"\nparallel = \"yes\"",
            "source = [",
        ];
        for case in cases {
            assert!(matches!(SplitConfig::from_toml_str(case), Err(SplitError::Config(_))), "case: {}", case);
        }
    }

    #[test]
    fn test_builder_and_assignments() {
        let config = SplitConfig::new("sheet.png", "out")
            .set_preset("positions-full").unwrap()
            .apply_assignment("tl=first.png").unwrap()
            .set_parallel(true);

        assert_eq!(config.filenames[&Label::TopLeft], "first.png");
        assert_eq!(config.filenames[&Label::BottomLeft], "infielder_full.png");
        assert!(config.parallel);
    }

    #[test]
    fn test_table_replacement_and_removal() {
        let table: BTreeMap<Label, String> = Label::ALL.iter()
            .map(|label| (*label, format!("q{}.webp", *label as usize)))
            .collect();

        let config = SplitConfig::new("sheet.png", "out")
            .set_filenames(table)
            .remove_filename(Label::TopRight)
            .set_show_progress(true);

        assert_eq!(config.filenames.len(), 3);
        assert_eq!(config.filenames[&Label::BottomRight], "q3.webp");
        assert!(config.show_progress);
        assert!(matches!(config.destinations().validate(), Err(SplitError::MissingLabel(Label::TopRight))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(SplitConfig::from_file("/nonexistent/job.toml"), Err(SplitError::Io(_))));
    }
}
