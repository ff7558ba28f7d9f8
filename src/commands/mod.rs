//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
mod cli;
pub mod split_command;
pub mod plan_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use split_command::SplitCommand;
pub use plan_command::PlanCommand;

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::config::SplitConfig;
use crate::quadrant::{SplitError, SplitResult};
use crate::splitter::BackgroundFilter;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct QuadkitCommandFactory;

impl QuadkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        QuadkitCommandFactory
    }
}

impl Default for QuadkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for QuadkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SplitResult<Box<dyn Command + 'a>> {
        let config = config_from_args(args)?;

        if args.get_flag("plan") {
            Ok(Box::new(PlanCommand::new(config, logger)))
        } else {
            Ok(Box::new(SplitCommand::new(config, logger)))
        }
    }
}

/// Build a job from CLI arguments
///
/// A `--config` file provides the base job; every argument given on the
/// command line overrides the matching value from the file.
pub fn config_from_args(args: &ArgMatches) -> SplitResult<SplitConfig> {
    let input = args.get_one::<String>("input");

    let mut config = match args.get_one::<String>("config") {
        Some(path) => {
            info!("Loading job file {}", path);
            let mut config = SplitConfig::from_file(path)?;
            if let Some(input) = input {
                config.source = PathBuf::from(input);
            }
            config
        },
        None => {
            let input = input
                .ok_or_else(|| SplitError::Config("Missing input file".to_string()))?;
            SplitConfig::new(input, ".")
        },
    };
    info!("Input file: {}", config.source.display());

    if let Some(dir) = args.get_one::<String>("output-dir") {
        config.destination_dir = PathBuf::from(dir);
    }
    info!("Output directory: {}", config.destination_dir.display());

    if let Some(name) = args.get_one::<String>("preset") {
        config = config.set_preset(name)?;
        info!("Using preset: {}", name);
    }

    if let Some(assignments) = args.get_many::<String>("name") {
        for assignment in assignments {
            config = config.apply_assignment(assignment)?;
        }
    }

    if args.get_flag("remove-background") && config.background.is_none() {
        config.background = Some(BackgroundFilter::default());
    }
    if args.get_flag("parallel") {
        config.parallel = true;
    }
    config.show_progress = args.get_flag("progress");

    info!("Filenames: {:?}", config.filenames);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrant::{Label, QuadrantMap};
    use image::{Rgb, RgbImage};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_sheet(dir: &Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("sheet.png");
        RgbImage::from_pixel(width, height, Rgb([10, 200, 30])).save(&path).unwrap();
        path
    }

    fn parse(args: &[&str]) -> SplitResult<SplitConfig> {
        let matches = build_cli().try_get_matches_from(args.iter().copied())
            .map_err(|e| SplitError::Config(e.to_string()))?;
        config_from_args(&matches)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["quadkit", "sheet.png"]).unwrap();
        assert_eq!(config.source, PathBuf::from("sheet.png"));
        assert_eq!(config.destination_dir, PathBuf::from("."));
        assert_eq!(config.filenames[&Label::TopLeft], "top-left.png");
        assert!(config.background.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_preset_and_overrides() {
        let config = parse(&[
            "quadkit", "sheet.png", "-o", "out", "-p", "positions",
            "-n", "tr=of.png", "--name", "bottom_right=p.png",
            "--remove-background", "--parallel",
        ]).unwrap();

        assert_eq!(config.destination_dir, PathBuf::from("out"));
        assert_eq!(config.filenames[&Label::TopLeft], "catcher.png");
        assert_eq!(config.filenames[&Label::TopRight], "of.png");
        assert_eq!(config.filenames[&Label::BottomRight], "p.png");
        assert_eq!(config.background, Some(BackgroundFilter::default()));
        assert!(config.parallel);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&["quadkit"]).is_err());
        assert!(parse(&["quadkit", "a.png", "-p", "unknown"]).is_err());
        assert!(matches!(parse(&["quadkit", "a.png", "-n", "middle=x.png"]), Err(SplitError::Config(_))));
    }

    #[test]
    fn test_factory_selects_command() {
        let logger = Logger::sink();
        let factory = QuadkitCommandFactory::new();

        let plan = build_cli().try_get_matches_from(["quadkit", "a.png", "--plan"]).unwrap();
        assert_eq!(factory.create_command(&plan, &logger).unwrap().name(), "plan");

        let split = build_cli().try_get_matches_from(["quadkit", "a.png"]).unwrap();
        assert_eq!(factory.create_command(&split, &logger).unwrap().name(), "split");
    }

    #[test]
    fn test_split_command_fails_on_partial_write() {
        let tmp = TempDir::new().unwrap();
        let source = write_sheet(tmp.path(), 6, 4);
        let config = SplitConfig::new(&source, tmp.path())
            .set_filename(Label::TopRight, "missing/top-right.png")
            .set_show_progress(false);

        let logger = Logger::sink();
        let command = SplitCommand::new(config, &logger);

        match command.execute() {
            Err(SplitError::IncompleteWrite { written, failed }) => {
                assert_eq!(written, vec![Label::TopLeft, Label::BottomLeft, Label::BottomRight]);
                assert_eq!(failed, vec![Label::TopRight]);
            },
            other => panic!("expected IncompleteWrite, got {:?}", other),
        }
        assert!(tmp.path().join("top-left.png").exists());
    }

    #[test]
    fn test_split_command_succeeds() {
        let tmp = TempDir::new().unwrap();
        let source = write_sheet(tmp.path(), 6, 4);
        let logger = Logger::sink();

        SplitCommand::new(SplitConfig::new(&source, tmp.path()), &logger).execute().unwrap();
        for label in Label::ALL {
            assert!(tmp.path().join(format!("{}.png", label)).exists());
        }
    }

    #[test]
    fn test_plan_command_renders_regions_without_writing() {
        let tmp = TempDir::new().unwrap();
        let source = write_sheet(tmp.path(), 9, 6);
        let out = tmp.path().join("out");
        fs::create_dir(&out).unwrap();

        let config = SplitConfig::new(&source, &out).set_preset("positions").unwrap();
        let logger = Logger::sink();
        let command = PlanCommand::new(config, &logger);

        let plan = command.render(&QuadrantMap::from_dimensions(9, 6).unwrap()).unwrap();
        assert!(plan.contains("(9x6)"));
        assert!(plan.contains(&format!("top-left      x=0 y=0 4x3 -> {}", out.join("catcher.png").display())));
        assert!(plan.contains(&format!("bottom-right  x=4 y=3 5x3 -> {}", out.join("pitcher.png").display())));

        command.execute().unwrap();
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_plan_command_rejects_incomplete_table() {
        let tmp = TempDir::new().unwrap();
        let source = write_sheet(tmp.path(), 4, 4);
        let config = SplitConfig::new(&source, tmp.path()).remove_filename(Label::BottomLeft);
        let logger = Logger::sink();

        let result = PlanCommand::new(config, &logger).execute();
        assert!(matches!(result, Err(SplitError::MissingLabel(Label::BottomLeft))));
    }
}
