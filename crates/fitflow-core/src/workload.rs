//! Simulated workload strategies.
//!
//! The processor calls `perform` once per unit after persisting its result.
//! The delay is what makes parallelism across images worthwhile.

use std::time::Duration;

use rand::Rng;

use crate::model::WorkUnit;

/// Stand-in for the real cost of computing one unit.
pub trait Workload: Send + Sync {
    /// Perform (simulate) the work for `unit`. Blocks the calling worker.
    fn perform(&self, unit: &WorkUnit);

    /// Short human-readable description.
    fn describe(&self) -> String;
}

/// No delay. Used by tests and dry runs.
pub struct NoDelay;

impl Workload for NoDelay {
    fn perform(&self, _unit: &WorkUnit) {}

    fn describe(&self) -> String {
        "none".into()
    }
}

/// Same delay for every unit.
pub struct FixedDelay(pub Duration);

impl Workload for FixedDelay {
    fn perform(&self, _unit: &WorkUnit) {
        std::thread::sleep(self.0);
    }

    fn describe(&self) -> String {
        format!("fixed {:?}", self.0)
    }
}

/// Delay drawn uniformly from `[min, max]` for each unit.
pub struct RandomDelay {
    min: Duration,
    max: Duration,
}

impl RandomDelay {
    /// Create a random delay. Bounds are swapped if given in the wrong order.
    #[must_use]
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Draw one delay.
    #[must_use]
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

impl Workload for RandomDelay {
    fn perform(&self, _unit: &WorkUnit) {
        std::thread::sleep(self.sample());
    }

    fn describe(&self) -> String {
        format!("random {:?}..={:?}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn no_delay_returns_immediately() {
        let start = Instant::now();
        NoDelay.perform(&WorkUnit::new(1, 1));
        assert!(start.elapsed() < Duration::from_millis(50));
        assert_eq!(NoDelay.describe(), "none");
    }

    #[test]
    fn fixed_delay_sleeps() {
        let start = Instant::now();
        FixedDelay(Duration::from_millis(5)).perform(&WorkUnit::new(1, 1));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn random_delay_within_bounds() {
        let delay = RandomDelay::new(Duration::from_millis(1), Duration::from_millis(4));
        for _ in 0..50 {
            let d = delay.sample();
            assert!(d >= Duration::from_millis(1) && d <= Duration::from_millis(4));
        }
    }

    #[test]
    fn random_delay_swaps_reversed_bounds() {
        let delay = RandomDelay::new(Duration::from_millis(9), Duration::from_millis(3));
        let d = delay.sample();
        assert!(d >= Duration::from_millis(3) && d <= Duration::from_millis(9));
    }

    #[test]
    fn random_delay_degenerate_range() {
        let delay = RandomDelay::new(Duration::from_millis(2), Duration::from_millis(2));
        assert_eq!(delay.sample(), Duration::from_millis(2));
    }
}
