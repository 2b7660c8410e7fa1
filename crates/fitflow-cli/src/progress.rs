//! Progress bar driven by unit events.

use indicatif::{ProgressBar, ProgressStyle};

use fitflow_core::observer::{UnitEvent, UnitObserver};

const TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} units {msg}";

/// Observer advancing a progress bar once per processed unit.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// Create a bar for `total_units` units. Hidden when `hidden` is set.
    #[must_use]
    pub fn new(total_units: u64, hidden: bool) -> Self {
        let bar = if hidden {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(total_units)
        };
        if let Ok(style) = ProgressStyle::with_template(TEMPLATE) {
            bar.set_style(style);
        }
        Self { bar }
    }

    /// Reset the bar for another run.
    pub fn reset(&self, label: &str) {
        self.bar.reset();
        self.bar.set_message(label.to_string());
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Units counted so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl UnitObserver for ProgressBarObserver {
    fn on_event(&self, event: &UnitEvent) {
        match event {
            UnitEvent::Processed { .. } => self.bar.inc(1),
            UnitEvent::ImageCompleted { image } => {
                self.bar.set_message(format!("image {image} done"));
            }
            UnitEvent::Resolved { .. } => {}
        }
    }
}
