//! Sequential orchestrator: images outer, fits inner, one unit at a time.

use std::time::Instant;

use tracing::warn;

use fitflow_core::error::FlowError;
use fitflow_core::model::WorkUnit;
use fitflow_core::options::PipelineConfig;

use crate::context::RunContext;
use crate::interfaces::{ImageOutcome, ImageStats, RunReport};
use crate::orchestrator::Orchestrator;

/// Resolves then processes each unit in grid order. Stops at the first error.
pub struct SequentialOrchestrator;

impl Orchestrator for SequentialOrchestrator {
    fn run(&self, ctx: &RunContext<'_>, config: &PipelineConfig) -> Result<RunReport, FlowError> {
        let start = Instant::now();
        let mut images = Vec::with_capacity(config.image_count as usize);

        for image in 1..=config.image_count {
            let mut stats = ImageStats::default();
            for fit in 1..=config.fit_count {
                let unit = WorkUnit::new(image, fit);
                let resolution = ctx.resolve_unit(unit).inspect_err(|e| {
                    warn!(%unit, error = %e, "aborting sequential run");
                })?;
                stats.record(&resolution);
                ctx.process_unit(unit, resolution).inspect_err(|e| {
                    warn!(%unit, error = %e, "aborting sequential run");
                })?;
            }
            ctx.complete_image(image);
            images.push(ImageOutcome {
                image,
                outcome: Ok(stats),
            });
        }

        Ok(RunReport {
            strategy: self.name(),
            workers: 1,
            duration: start.elapsed(),
            images,
        })
    }

    fn name(&self) -> &'static str {
        "Sequential"
    }
}
