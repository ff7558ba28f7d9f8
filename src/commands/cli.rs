//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::config::PRESET_NAMES;

/// Build the `quadkit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("QuadKit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Split an image into four quadrant files")
        .arg(
            Arg::new("input")
                .help("Input image file")
                .required_unless_present("config")
                .index(1),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory the quadrant files are written to (default: current directory)")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("preset")
                .short('p')
                .long("preset")
                .help("Filename preset")
                .value_name("NAME")
                .value_parser(PRESET_NAMES)
                .required(false),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .help("Output file for one quadrant, e.g. 'top-left=catcher.png' (repeatable)")
                .value_name("LABEL=FILE")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML job file; command-line values override it")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("remove-background")
                .long("remove-background")
                .help("Make bright gray backdrop pixels transparent")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .help("Write the quadrants concurrently")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("plan")
                .long("plan")
                .help("Print the quadrant regions without writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar while writing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
