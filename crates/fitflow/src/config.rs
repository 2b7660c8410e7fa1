//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::Parser;

use fitflow_core::constants::{
    DEFAULT_FIT_COUNT, DEFAULT_IMAGE_COUNT, DEFAULT_OUTPUT_DIR, DEFAULT_PREDICTION_DIR,
};
use fitflow_core::error::FlowError;
use fitflow_core::options::{BootstrapMode, PipelineConfig};
use fitflow_core::workload::{FixedDelay, NoDelay, RandomDelay, Workload};
use fitflow_orchestration::selection::ExecutionMode;

/// fitflow — reuse the reference image's fits across an image x fit grid.
#[derive(Parser, Debug)]
#[command(name = "fitflow", version, about)]
pub struct AppConfig {
    /// Number of images to process.
    #[arg(short, long, default_value_t = DEFAULT_IMAGE_COUNT, env = "FITFLOW_IMAGES")]
    pub images: u32,

    /// Number of fits per image.
    #[arg(short, long, default_value_t = DEFAULT_FIT_COUNT, env = "FITFLOW_FITS")]
    pub fits: u32,

    /// Worker pool size for parallel runs (0 = available parallelism).
    #[arg(short, long, default_value = "0", env = "FITFLOW_WORKERS")]
    pub workers: usize,

    /// Execution mode: sequential, parallel, or all.
    #[arg(long, default_value = "parallel")]
    pub mode: String,

    /// Bootstrap ordering: strict, best-effort, or skip.
    #[arg(long, default_value = "strict")]
    pub bootstrap: String,

    /// Directory for result artifacts.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "FITFLOW_OUTPUT_DIR")]
    pub output_dir: String,

    /// Directory for reference artifacts.
    #[arg(long, default_value = DEFAULT_PREDICTION_DIR, env = "FITFLOW_PREDICTION_DIR")]
    pub prediction_dir: String,

    /// Keep artifacts in memory instead of writing JSON files.
    #[arg(long)]
    pub memory: bool,

    /// Simulated workload per unit: none, fixed, or random.
    #[arg(long, default_value = "random")]
    pub delay: String,

    /// Fixed delay, or lower bound of the random delay (e.g. "1s", "500ms").
    #[arg(long, default_value = "1s")]
    pub delay_min: String,

    /// Upper bound of the random delay.
    #[arg(long, default_value = "5s")]
    pub delay_max: String,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (errors only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Build the pipeline configuration passed to bootstrap and orchestrators.
    pub fn pipeline_config(&self) -> Result<PipelineConfig, FlowError> {
        let config = PipelineConfig {
            image_count: self.images,
            fit_count: self.fits,
            pool_size: self.workers,
            bootstrap: self.bootstrap.parse::<BootstrapMode>()?,
        }
        .normalize();
        config.validate()?;
        Ok(config)
    }

    /// Selected execution mode.
    pub fn execution_mode(&self) -> Result<ExecutionMode, FlowError> {
        self.mode.parse()
    }

    /// Build the workload strategy.
    pub fn workload(&self) -> Result<Box<dyn Workload>, FlowError> {
        match self.delay.as_str() {
            "none" => Ok(Box::new(NoDelay)),
            "fixed" => Ok(Box::new(FixedDelay(parse_delay(&self.delay_min)?))),
            "random" => Ok(Box::new(RandomDelay::new(
                parse_delay(&self.delay_min)?,
                parse_delay(&self.delay_max)?,
            ))),
            other => Err(FlowError::Config(format!("unknown delay kind: {other}"))),
        }
    }
}

fn parse_delay(s: &str) -> Result<Duration, FlowError> {
    parse_duration(s).ok_or_else(|| FlowError::Config(format!("invalid duration: {s:?}")))
}

/// Parse a duration string like "5m", "1h", "30s", "500ms".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(60)?))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n.checked_mul(3600)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fitflow").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("5m"), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("3"), Some(Duration::from_secs(3)));
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(parse_duration("1ms"), Some(Duration::from_millis(1)));
        assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
    }

    #[test]
    fn parse_duration_invalid() {
        assert_eq!(parse_duration("soon"), None);
        assert!(matches!(parse_delay("x1s"), Err(FlowError::Config(_))));
    }

    #[test]
    fn parse_duration_out_of_range() {
        assert_eq!(parse_duration("307445734561825861m"), None);
        assert_eq!(parse_duration("5124095576030432h"), None);
        let config = parse_args(&["--delay", "fixed", "--delay-min", "307445734561825861m"]);
        assert!(matches!(config.workload(), Err(FlowError::Config(_))));
    }

    #[test]
    fn defaults() {
        let config = parse_args(&[]);
        assert_eq!(config.images, 5);
        assert_eq!(config.fits, 3);
        assert_eq!(config.output_dir, "outputs");
        assert_eq!(config.prediction_dir, "predictions");
        assert_eq!(config.execution_mode().unwrap(), ExecutionMode::Parallel);
        let pipeline = config.pipeline_config().unwrap();
        assert_eq!(pipeline.bootstrap, BootstrapMode::Strict);
        assert!(pipeline.pool_size >= 1);
    }

    #[test]
    fn pipeline_config_from_flags() {
        let config = parse_args(&["-i", "2", "-f", "4", "-w", "3", "--bootstrap", "skip"]);
        let pipeline = config.pipeline_config().unwrap();
        assert_eq!(pipeline.image_count, 2);
        assert_eq!(pipeline.fit_count, 4);
        assert_eq!(pipeline.pool_size, 3);
        assert_eq!(pipeline.bootstrap, BootstrapMode::Skip);
    }

    #[test]
    fn rejects_zero_images() {
        let config = parse_args(&["--images", "0"]);
        assert!(matches!(config.pipeline_config(), Err(FlowError::Config(_))));
    }

    #[test]
    fn rejects_unknown_bootstrap() {
        let config = parse_args(&["--bootstrap", "lazy"]);
        assert!(matches!(config.pipeline_config(), Err(FlowError::Config(_))));
    }

    #[test]
    fn workload_kinds() {
        assert_eq!(parse_args(&["--delay", "none"]).workload().unwrap().describe(), "none");
        let fixed = parse_args(&["--delay", "fixed", "--delay-min", "3s"]).workload().unwrap();
        assert_eq!(fixed.describe(), "fixed 3s");
        assert!(parse_args(&["--delay", "random"]).workload().is_ok());
        assert!(parse_args(&["--delay", "gaussian"]).workload().is_err());
    }
}
