//! Run configuration passed explicitly to bootstrap and orchestrators.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_FIT_COUNT, DEFAULT_IMAGE_COUNT};
use crate::error::FlowError;

/// How bootstrap is ordered relative to orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapMode {
    /// Bootstrap completes before any unit resolves its dependency.
    #[default]
    Strict,
    /// Bootstrap runs concurrently with orchestration. A resolver that checks
    /// a fit before its reference is written takes the default payload.
    BestEffort,
    /// Bootstrap does not run.
    Skip,
}

impl fmt::Display for BootstrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::BestEffort => f.write_str("best-effort"),
            Self::Skip => f.write_str("skip"),
        }
    }
}

impl FromStr for BootstrapMode {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "best-effort" | "besteffort" => Ok(Self::BestEffort),
            "skip" | "none" => Ok(Self::Skip),
            other => Err(FlowError::Config(format!("unknown bootstrap mode: {other}"))),
        }
    }
}

/// Grid dimensions and execution limits for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Number of images (outer dimension).
    pub image_count: u32,
    /// Number of fits per image (inner dimension).
    pub fit_count: u32,
    /// Worker pool size for the parallel orchestrator (0 = available parallelism).
    pub pool_size: usize,
    /// Bootstrap ordering.
    pub bootstrap: BootstrapMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            image_count: DEFAULT_IMAGE_COUNT,
            fit_count: DEFAULT_FIT_COUNT,
            pool_size: 0,
            bootstrap: BootstrapMode::Strict,
        }
    }
}

impl PipelineConfig {
    /// Create a config for an `image_count` x `fit_count` grid with defaults elsewhere.
    #[must_use]
    pub fn new(image_count: u32, fit_count: u32) -> Self {
        Self {
            image_count,
            fit_count,
            ..Default::default()
        }
    }

    /// Normalize the config, resolving an automatic pool size.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.pool_size == 0 {
            self.pool_size = std::thread::available_parallelism().map_or(1, usize::from);
        }
        self
    }

    /// Reject grids with an empty dimension.
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.image_count == 0 {
            return Err(FlowError::Config("image_count must be at least 1".into()));
        }
        if self.fit_count == 0 {
            return Err(FlowError::Config("fit_count must be at least 1".into()));
        }
        Ok(())
    }

    /// Total number of work units in the grid.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        u64::from(self.image_count) * u64::from(self.fit_count)
    }
}
