//! Command pattern interfaces
//!
//! Every CLI mode (split, plan) is a [`Command`] built by a
//! [`CommandFactory`] from the parsed arguments.

use clap::ArgMatches;

use crate::quadrant::SplitResult;
use crate::utils::logger::Logger;

/// An executable CLI operation
pub trait Command {
    /// Short name used in log records
    fn name(&self) -> &'static str;

    /// Run the operation to completion
    ///
    /// A split that wrote only some quadrants is an error here, even though
    /// the library reports it as a successful partial result.
    fn execute(&self) -> SplitResult<()>;
}

/// Builds the command selected by the CLI arguments
pub trait CommandFactory<'a> {
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger the command records its writes to
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SplitResult<Box<dyn Command + 'a>>;
}
