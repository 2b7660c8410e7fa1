//! CLI report presenter.

use fitflow_orchestration::interfaces::{ReportPresenter, RunReport};
use fitflow_orchestration::orchestrator::speedup;

use crate::output::{format_duration, format_ratio};
use crate::ui::{print_error, print_header, print_success};

/// CLI report presenter.
pub struct CLIReportPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIReportPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ReportPresenter for CLIReportPresenter {
    fn present_report(&self, report: &RunReport, image_count: u32, fit_count: u32) {
        if self.quiet {
            return;
        }

        let processed = report.units_processed();
        print_header(&format!("{} run", report.strategy));
        println!("Images: {image_count}");
        println!("Fits per image: {fit_count}");
        println!("Workers: {}", report.workers);
        println!("Duration: {}", format_duration(report.duration));
        println!(
            "Reused references: {} ({})",
            report.reused(),
            format_ratio(report.reused(), processed)
        );
        println!("Cold starts: {}", report.cold_starts());

        if self.verbose {
            for line in image_lines(report) {
                println!("{line}");
            }
        }

        print_success(&format!("{processed} result artifacts written"));
    }

    fn present_comparison(&self, reports: &[RunReport]) {
        if self.quiet {
            return;
        }

        println!("\nComparison Results:");
        println!("{:-<60}", "");
        for report in reports {
            println!("{}", comparison_row(report));
        }
        if let Some(ratio) = speedup(reports) {
            println!("  Speedup: {ratio:.2}x");
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Per-image detail lines. Only completed runs reach the presenter, so every
/// image listed here succeeded.
fn image_lines(report: &RunReport) -> Vec<String> {
    report
        .images
        .iter()
        .filter_map(|image| {
            let stats = image.outcome.as_ref().ok()?;
            Some(format!(
                "  image {:>3}: {} processed, {} reused, {} cold",
                image.image, stats.processed, stats.reused, stats.cold_starts
            ))
        })
        .collect()
}

fn comparison_row(report: &RunReport) -> String {
    format!(
        "  {:<20} {:>10} {:>3} worker(s)",
        report.strategy,
        format_duration(report.duration),
        report.workers,
    )
}
