//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::info;

use fitflow_cli::presenter::CLIReportPresenter;
use fitflow_cli::progress::ProgressBarObserver;
use fitflow_core::fs_store::FsStore;
use fitflow_core::observer::UnitObserver;
use fitflow_core::observers::LoggingObserver;
use fitflow_core::store::{ArtifactStore, MemoryStore};
use fitflow_orchestration::context::RunContext;
use fitflow_orchestration::interfaces::ReportPresenter;
use fitflow_orchestration::orchestrator::run_pipeline;
use fitflow_orchestration::selection::get_orchestrators_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        fitflow_cli::completion::write_completion::<AppConfig>(shell, &mut std::io::stdout())
            .context("failed to write completion script")?;
        return Ok(());
    }

    let presenter = CLIReportPresenter::new(config.verbose, config.quiet);
    let result = run_cli(config, &presenter);
    if let Err(e) = &result {
        presenter.present_error(&format!("{e:#}"));
    }
    result
}

fn run_cli(config: &AppConfig, presenter: &dyn ReportPresenter) -> Result<()> {
    let pipeline = config.pipeline_config()?;
    let orchestrators = get_orchestrators_to_run(config.execution_mode()?);
    let workload = config.workload()?;
    let store = open_store(config)?;

    info!(workload = %workload.describe(), "Starting X-ray diffraction workflow...");

    let progress = ProgressBarObserver::new(pipeline.unit_count(), config.quiet || config.verbose);
    let observer: &dyn UnitObserver = if config.verbose {
        &LoggingObserver
    } else {
        &progress
    };
    let ctx = RunContext::new(store.as_ref(), workload.as_ref(), observer);

    let mut reports = Vec::with_capacity(orchestrators.len());
    for orchestrator in &orchestrators {
        progress.reset(orchestrator.name());
        let report = run_pipeline(orchestrator.as_ref(), &ctx, &pipeline);
        progress.finish();
        let report = report.with_context(|| format!("{} run failed", orchestrator.name()))?;
        presenter.present_report(&report, pipeline.image_count, pipeline.fit_count);
        reports.push(report);
    }

    if reports.len() > 1 {
        presenter.present_comparison(&reports);
    }
    info!("Workflow completed.");
    Ok(())
}

fn open_store(config: &AppConfig) -> Result<Box<dyn ArtifactStore>> {
    if config.memory {
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = FsStore::open(&config.output_dir, &config.prediction_dir).with_context(|| {
        format!(
            "failed to create artifact directories {} and {}",
            config.output_dir, config.prediction_dir
        )
    })?;
    Ok(Box::new(store))
}
