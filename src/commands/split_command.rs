//! Quadrant split command

use log::{error, info};

use crate::commands::command_traits::Command;
use crate::config::SplitConfig;
use crate::quadrant::SplitResult;
use crate::splitter::QuadrantSplitter;
use crate::utils::logger::Logger;

/// Command that writes the four quadrant files
pub struct SplitCommand<'a> {
    /// Job to run
    config: SplitConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SplitCommand<'a> {
    pub fn new(config: SplitConfig, logger: &'a Logger) -> Self {
        SplitCommand { config, logger }
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn name(&self) -> &'static str {
        "split"
    }

    fn execute(&self) -> SplitResult<()> {
        info!("Splitting {} into {}", self.config.source.display(), self.config.destination_dir.display());

        let splitter = QuadrantSplitter::from_config(&self.config, self.logger);
        let report = splitter.run(&self.config)?;

        print!("{}", report.summary());

        if let Err(e) = report.ensure_complete() {
            error!("{}", e);
            return Err(e);
        }

        println!("\nAll quadrants split successfully!");
        self.logger.log("Split successful")?;
        Ok(())
    }
}
