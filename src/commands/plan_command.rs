//! Dry-run command
//!
//! Prints the regions a split would produce and the files it would write,
//! without writing anything.

use log::info;

use crate::commands::command_traits::Command;
use crate::config::SplitConfig;
use crate::quadrant::{QuadrantMap, SplitResult};
use crate::splitter::QuadrantSplitter;
use crate::utils::logger::Logger;

/// Command that reports the quadrant layout of a source image
pub struct PlanCommand<'a> {
    config: SplitConfig,
    logger: &'a Logger,
}

impl<'a> PlanCommand<'a> {
    pub fn new(config: SplitConfig, logger: &'a Logger) -> Self {
        PlanCommand { config, logger }
    }

    /// Render a plan as text
    pub fn render(&self, map: &QuadrantMap) -> SplitResult<String> {
        let destinations = self.config.destinations();
        destinations.validate()?;

        let mut result = format!("Quadrant plan for {} ({}x{}):\n",
                                 self.config.source.display(), map.width(), map.height());
        for (label, region) in map.iter() {
            result.push_str(&format!("  {:<13} x={} y={} {}x{} -> {}\n",
                                     label.as_str(), region.x, region.y, region.width, region.height,
                                     destinations.path(label)?.display()));
        }
        Ok(result)
    }
}

impl<'a> Command for PlanCommand<'a> {
    fn name(&self) -> &'static str {
        "plan"
    }

    fn execute(&self) -> SplitResult<()> {
        info!("Planning split of {}", self.config.source.display());

        let splitter = QuadrantSplitter::new(self.logger);
        let map = splitter.plan(&self.config.source)?;
        let plan = self.render(&map)?;

        print!("{}", plan);
        self.logger.log(&plan)?;
        Ok(())
    }
}
