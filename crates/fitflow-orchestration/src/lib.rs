//! # fitflow-orchestration
//!
//! Sequential and parallel execution of the work-unit grid, bootstrap
//! gating, and run reports.

pub mod context;
pub mod interfaces;
pub mod orchestrator;
pub mod parallel;
pub mod selection;
pub mod sequential;

pub use context::RunContext;
pub use interfaces::{ImageOutcome, ImageStats, ReportPresenter, RunReport};
pub use orchestrator::{run_pipeline, speedup, Orchestrator};
pub use parallel::ParallelOrchestrator;
pub use selection::{get_orchestrators_to_run, ExecutionMode};
pub use sequential::SequentialOrchestrator;
