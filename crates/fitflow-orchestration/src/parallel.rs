//! Parallel orchestrator: one task per image on a bounded worker pool.
//!
//! Each task resolves every fit of its image first, then processes the fits
//! in increasing fit order. Tasks share nothing but the store, and no order
//! is guaranteed between images.

use std::time::Instant;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use fitflow_core::error::FlowError;
use fitflow_core::model::WorkUnit;
use fitflow_core::options::PipelineConfig;
use fitflow_core::resolver::Resolution;

use crate::context::RunContext;
use crate::interfaces::{ImageOutcome, ImageStats, RunReport};
use crate::orchestrator::Orchestrator;

/// Fans images out over a dedicated pool of `config.pool_size` threads.
///
/// A failed image does not stop the others; the report records every
/// image's outcome once all tasks have joined.
pub struct ParallelOrchestrator;

impl Orchestrator for ParallelOrchestrator {
    fn run(&self, ctx: &RunContext<'_>, config: &PipelineConfig) -> Result<RunReport, FlowError> {
        let workers = config.clone().normalize().pool_size;
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("fitflow-worker-{i}"))
            .build()
            .map_err(|e| FlowError::Pool(format!("failed to create worker pool: {e}")))?;

        let start = Instant::now();
        let fit_count = config.fit_count;
        let images: Vec<ImageOutcome> = pool.install(|| {
            (1..=config.image_count)
                .into_par_iter()
                .map(|image| {
                    let outcome = process_image(ctx, image, fit_count);
                    if let Err(e) = &outcome {
                        warn!(image, error = %e, "image failed");
                    }
                    ImageOutcome { image, outcome }
                })
                .collect()
        });

        Ok(RunReport {
            strategy: self.name(),
            workers,
            duration: start.elapsed(),
            images,
        })
    }

    fn name(&self) -> &'static str {
        "Parallel"
    }
}

/// Resolve all fits of `image`, then process them in fit order.
fn process_image(ctx: &RunContext<'_>, image: u32, fit_count: u32) -> Result<ImageStats, FlowError> {
    debug!(image, "worker picked up image");

    let resolved: Vec<(WorkUnit, Resolution)> = (1..=fit_count)
        .map(|fit| {
            let unit = WorkUnit::new(image, fit);
            ctx.resolve_unit(unit).map(|resolution| (unit, resolution))
        })
        .collect::<Result<_, _>>()?;

    let mut stats = ImageStats::default();
    for (unit, resolution) in resolved {
        stats.record(&resolution);
        ctx.process_unit(unit, resolution)?;
    }

    ctx.complete_image(image);
    Ok(stats)
}
