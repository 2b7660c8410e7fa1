//! Orchestrator trait and bootstrap gating.

use tracing::{info, warn};

use fitflow_core::bootstrap::run_bootstrap;
use fitflow_core::error::FlowError;
use fitflow_core::options::{BootstrapMode, PipelineConfig};

use crate::context::RunContext;
use crate::interfaces::RunReport;

/// An execution strategy over the image x fit grid.
pub trait Orchestrator: Send + Sync {
    /// Process every unit of the grid described by `config`.
    ///
    /// Does not run bootstrap; see [`run_pipeline`].
    fn run(&self, ctx: &RunContext<'_>, config: &PipelineConfig) -> Result<RunReport, FlowError>;

    /// Name of this strategy.
    fn name(&self) -> &'static str;
}

/// Run bootstrap and `orchestrator` according to `config.bootstrap`.
///
/// - `Strict`: bootstrap is joined before the first unit is scheduled.
/// - `BestEffort`: bootstrap runs on its own thread alongside orchestration.
///   Resolvers may see a reference as absent and cold-start.
/// - `Skip`: no bootstrap.
///
/// Any failed image fails the run, after every image has been attempted.
pub fn run_pipeline(
    orchestrator: &dyn Orchestrator,
    ctx: &RunContext<'_>,
    config: &PipelineConfig,
) -> Result<RunReport, FlowError> {
    config.validate()?;
    info!(
        strategy = orchestrator.name(),
        images = config.image_count,
        fits = config.fit_count,
        bootstrap = %config.bootstrap,
        "starting run"
    );

    let report = match config.bootstrap {
        BootstrapMode::Strict => {
            run_bootstrap(ctx.store, config.fit_count)?;
            orchestrator.run(ctx, config)?
        }
        BootstrapMode::Skip => orchestrator.run(ctx, config)?,
        BootstrapMode::BestEffort => std::thread::scope(|s| {
            let bootstrap = s.spawn(|| run_bootstrap(ctx.store, config.fit_count));
            let report = orchestrator.run(ctx, config);
            bootstrap
                .join()
                .map_err(|_| FlowError::Bootstrap("bootstrap thread panicked".into()))??;
            report
        })?,
    };

    if !report.is_success() {
        warn!(failed = ?report.failed_images(), "run finished with failed images");
    }
    report.into_result()
}

/// Duration ratio of the slowest run to the fastest one.
///
/// `None` with fewer than two reports or a zero-length fastest run.
#[must_use]
pub fn speedup(reports: &[RunReport]) -> Option<f64> {
    if reports.len() < 2 {
        return None;
    }
    let slowest = reports.iter().map(|r| r.duration).max()?;
    let fastest = reports.iter().map(|r| r.duration).min()?;
    if fastest.is_zero() {
        return None;
    }
    Some(slowest.as_secs_f64() / fastest.as_secs_f64())
}
