//! Quadrant splitter
//!
//! Loads one raster image, derives its four quadrant regions, crops each one
//! and writes it to the destination registered for its label.

use std::path::Path;

use image::DynamicImage;
use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::config::SplitConfig;
use crate::quadrant::{Destinations, Label, QuadrantMap, Region, SplitError, SplitResult};
use crate::utils::format_utils;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

use super::background::BackgroundFilter;
use super::report::{QuadrantOutcome, SplitReport};

/// Splits images into four quadrant files
pub struct QuadrantSplitter<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
    /// Optional keying step applied to every crop
    background: Option<BackgroundFilter>,
    /// Write the quadrants on the rayon pool
    parallel: bool,
    /// Draw a progress bar while writing
    show_progress: bool,
}

impl<'a> QuadrantSplitter<'a> {
    /// Create a splitter with pixel-exact, sequential, silent defaults
    pub fn new(logger: &'a Logger) -> Self {
        QuadrantSplitter {
            logger,
            background: None,
            parallel: false,
            show_progress: false,
        }
    }

    /// Create a splitter using the options of a job configuration
    pub fn from_config(config: &SplitConfig, logger: &'a Logger) -> Self {
        QuadrantSplitter::new(logger)
            .with_background(config.background)
            .parallel(config.parallel)
            .show_progress(config.show_progress)
    }

    /// Set or clear the background keying step
    pub fn with_background(mut self, background: Option<BackgroundFilter>) -> Self {
        self.background = background;
        self
    }

    /// Enable or disable concurrent writes
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable or disable the progress bar
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Load and decode a source image
    ///
    /// # Returns
    /// The decoded image, or `SourceLoad` if it cannot be read or decoded
    pub fn load_source(&self, source: &Path) -> SplitResult<DynamicImage> {
        info!("Loading source image {}", source.display());

        let image = image::open(source).map_err(|cause| {
            error!("Failed to load {}: {}", source.display(), cause);
            SplitError::SourceLoad { path: source.to_path_buf(), cause }
        })?;

        info!("Source image is {}x{} ({:?})", image.width(), image.height(), image.color());
        Ok(image)
    }

    /// Compute the quadrant layout of a source file without writing anything
    pub fn plan(&self, source: &Path) -> SplitResult<QuadrantMap> {
        let image = self.load_source(source)?;
        QuadrantMap::from_dimensions(image.width(), image.height())
    }

    /// Run a complete job described by a configuration
    pub fn run(&self, config: &SplitConfig) -> SplitResult<SplitReport> {
        let destinations = config.destinations();
        self.split_file(&config.source, &destinations)
    }

    /// Split the image stored at `source`
    ///
    /// Destinations are validated before the source is even opened, so a
    /// missing label never costs a decode.
    pub fn split_file(&self, source: &Path, destinations: &Destinations) -> SplitResult<SplitReport> {
        destinations.validate()?;
        let image = self.load_source(source)?;
        self.split_image(&image, destinations)
    }

    /// Split an already decoded image
    ///
    /// Fails without writing anything on `MissingLabel` or
    /// `InvalidDimensions`. Write failures are per label and end up in the
    /// returned report.
    pub fn split_image(&self, image: &DynamicImage, destinations: &Destinations) -> SplitResult<SplitReport> {
        destinations.validate()?;
        let map = QuadrantMap::from_dimensions(image.width(), image.height())?;

        let mut jobs = Vec::with_capacity(Label::ALL.len());
        for (label, region) in map.iter() {
            jobs.push((label, region, destinations.path(label)?));
        }

        if self.background.is_some() {
            for (_, _, path) in &jobs {
                if !format_utils::supports_alpha(path) {
                    warn!("{} cannot store transparency, keyed background will be lost", path.display());
                }
            }
        }

        let progress = if self.show_progress {
            ProgressTracker::new(jobs.len() as u64, "Writing quadrants")
        } else {
            ProgressTracker::hidden(jobs.len() as u64)
        };

        let write = |(label, region, path): &(Label, Region, &Path)| {
            let outcome = self.write_quadrant(image, *label, *region, path);
            progress.increment(1);
            (*label, outcome)
        };

        let outcomes: Vec<(Label, QuadrantOutcome)> = if self.parallel {
            debug!("Writing quadrants in parallel");
            jobs.par_iter().map(write).collect()
        } else {
            jobs.iter().map(write).collect()
        };

        progress.finish();

        let report = SplitReport::new(outcomes);
        info!("Split finished: {} written, {} failed", report.written().len(), report.failed().len());
        Ok(report)
    }

    /// Crop one quadrant and write it
    fn write_quadrant(&self, image: &DynamicImage, label: Label, region: Region, path: &Path) -> QuadrantOutcome {
        debug!("Cropping {} at x={}, y={}, width={}, height={}",
               label, region.x, region.y, region.width, region.height);

        let mut cropped = image.crop_imm(region.x, region.y, region.width, region.height);
        if let Some(filter) = &self.background {
            cropped = filter.apply(&cropped);
        }

        if format_utils::is_lossy(path) {
            warn!("{} uses a lossy format, {} quadrant will not be pixel-exact", path.display(), label);
        }

        match cropped.save(path) {
            Ok(()) => {
                info!("Saved: {}", path.display());
                if let Err(e) = self.logger.log(&format!("Saved: {}", path.display())) {
                    warn!("Could not record write of {}: {}", path.display(), e);
                }
                QuadrantOutcome::Written {
                    path: path.to_path_buf(),
                    width: cropped.width(),
                    height: cropped.height(),
                }
            },
            Err(cause) => {
                error!("Failed to write {} quadrant to {}: {}", label, path.display(), cause);
                QuadrantOutcome::Failed(SplitError::DestinationWrite {
                    label,
                    path: path.to_path_buf(),
                    cause,
                })
            },
        }
    }
}
