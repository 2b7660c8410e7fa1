//! Run reports and presentation interfaces.

use std::time::Duration;

use fitflow_core::error::FlowError;
use fitflow_core::resolver::Resolution;

/// Per-image counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageStats {
    /// Units whose result artifact was persisted.
    pub processed: u32,
    /// Units that reused the reference artifact.
    pub reused: u32,
    /// Units that started from the default payload.
    pub cold_starts: u32,
}

impl ImageStats {
    /// Count one processed unit.
    pub fn record(&mut self, resolution: &Resolution) {
        self.processed += 1;
        if resolution.is_reuse() {
            self.reused += 1;
        } else {
            self.cold_starts += 1;
        }
    }
}

/// Outcome of one image's task.
#[derive(Debug)]
pub struct ImageOutcome {
    pub image: u32,
    pub outcome: Result<ImageStats, FlowError>,
}

/// Result of one orchestrator run.
#[derive(Debug)]
pub struct RunReport {
    /// Orchestrator name.
    pub strategy: &'static str,
    /// Number of workers used.
    pub workers: usize,
    /// Wall-clock duration of the orchestration phase.
    pub duration: Duration,
    /// One entry per image, ascending image index.
    pub images: Vec<ImageOutcome>,
}

impl RunReport {
    fn successful(&self) -> impl Iterator<Item = &ImageStats> {
        self.images.iter().filter_map(|i| i.outcome.as_ref().ok())
    }

    /// Total units processed across successful images.
    #[must_use]
    pub fn units_processed(&self) -> u64 {
        self.successful().map(|s| u64::from(s.processed)).sum()
    }

    /// Total units that reused a reference artifact.
    #[must_use]
    pub fn reused(&self) -> u64 {
        self.successful().map(|s| u64::from(s.reused)).sum()
    }

    /// Total units that cold-started.
    #[must_use]
    pub fn cold_starts(&self) -> u64 {
        self.successful().map(|s| u64::from(s.cold_starts)).sum()
    }

    /// Indices of failed images, ascending.
    #[must_use]
    pub fn failed_images(&self) -> Vec<u32> {
        self.images
            .iter()
            .filter(|i| i.outcome.is_err())
            .map(|i| i.image)
            .collect()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.images.iter().all(|i| i.outcome.is_ok())
    }

    /// Turn failed images into an error carrying the lowest failed image's error.
    pub fn into_result(self) -> Result<Self, FlowError> {
        if self.is_success() {
            return Ok(self);
        }
        let failed = self.failed_images();
        let first = self
            .images
            .into_iter()
            .find_map(|i| i.outcome.err())
            .unwrap_or_else(|| FlowError::Config("no failed image recorded".into()));
        Err(FlowError::ImagesFailed {
            failed,
            first: Box::new(first),
        })
    }
}

/// Trait for presenting run reports to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present one run.
    fn present_report(&self, report: &RunReport, image_count: u32, fit_count: u32);

    /// Present a timing comparison of several runs.
    fn present_comparison(&self, reports: &[RunReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}
