use std::path::Path;
use image::DynamicImage;
use log::info;

use crate::config::SplitConfig;
use crate::quadrant::{Destinations, QuadrantMap, SplitResult};
use crate::splitter::{QuadrantSplitter, SplitReport};
use crate::utils::logger::Logger;

/// Main interface to the QuadKit library
pub struct QuadKit {
    logger: Logger,
}

impl QuadKit {
    /// Create a new QuadKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "quadkit.log"
    ///
    /// # Returns
    /// A QuadKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> SplitResult<Self> {
        let log_path = log_file.unwrap_or("quadkit.log");
        let logger = Logger::new(log_path)?;
        Ok(QuadKit { logger })
    }

    /// Create a QuadKit instance that keeps no log file
    pub fn without_log() -> Self {
        QuadKit { logger: Logger::sink() }
    }

    /// Run a split job
    ///
    /// Fatal errors (unreadable source, image too small, missing label) are
    /// returned as `Err`. Per-quadrant write failures are part of the report;
    /// use [`SplitReport::ensure_complete`] for all-or-error semantics.
    ///
    /// # Arguments
    /// * `config` - The job to run
    ///
    /// # Returns
    /// The per-quadrant report or a fatal error
    pub fn split(&self, config: &SplitConfig) -> SplitResult<SplitReport> {
        info!("Splitting {} with {} destination(s)", config.source.display(), config.filenames.len());
        QuadrantSplitter::from_config(config, &self.logger).run(config)
    }

    /// Split the image at `source` into explicit destinations
    pub fn split_to(&self, source: &Path, destinations: &Destinations) -> SplitResult<SplitReport> {
        QuadrantSplitter::new(&self.logger).split_file(source, destinations)
    }

    /// Split an in-memory image into explicit destinations
    pub fn split_image(&self, image: &DynamicImage, destinations: &Destinations) -> SplitResult<SplitReport> {
        QuadrantSplitter::new(&self.logger).split_image(image, destinations)
    }

    /// Compute the quadrant layout of a source image without writing anything
    ///
    /// # Arguments
    /// * `source` - Path to the source image
    ///
    /// # Returns
    /// The quadrant regions, or `SourceLoad` / `InvalidDimensions`
    pub fn plan(&self, source: &Path) -> SplitResult<QuadrantMap> {
        QuadrantSplitter::new(&self.logger).plan(source)
    }
}
