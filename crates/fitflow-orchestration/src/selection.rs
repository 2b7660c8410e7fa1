//! Orchestrator selection.

use std::fmt;
use std::str::FromStr;

use fitflow_core::error::FlowError;

use crate::orchestrator::Orchestrator;
use crate::parallel::ParallelOrchestrator;
use crate::sequential::SequentialOrchestrator;

/// Which orchestrators a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    Sequential,
    #[default]
    Parallel,
    /// Sequential then parallel, against the same store.
    All,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Parallel => f.write_str("parallel"),
            Self::All => f.write_str("all"),
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" | "seq" => Ok(Self::Sequential),
            "parallel" | "par" => Ok(Self::Parallel),
            "all" => Ok(Self::All),
            other => Err(FlowError::Config(format!("unknown execution mode: {other}"))),
        }
    }
}

/// Get orchestrators to run for `mode`, in execution order.
#[must_use]
pub fn get_orchestrators_to_run(mode: ExecutionMode) -> Vec<Box<dyn Orchestrator>> {
    match mode {
        ExecutionMode::Sequential => vec![Box::new(SequentialOrchestrator)],
        ExecutionMode::Parallel => vec![Box::new(ParallelOrchestrator)],
        ExecutionMode::All => vec![Box::new(SequentialOrchestrator), Box::new(ParallelOrchestrator)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all() {
        let names: Vec<_> = get_orchestrators_to_run(ExecutionMode::All)
            .iter()
            .map(|o| o.name())
            .collect();
        assert_eq!(names, vec!["Sequential", "Parallel"]);
    }

    #[test]
    fn select_single() {
        let orchestrators = get_orchestrators_to_run(ExecutionMode::Sequential);
        assert_eq!(orchestrators.len(), 1);
        assert_eq!(orchestrators[0].name(), "Sequential");
    }

    #[test]
    fn parse_modes() {
        assert_eq!("seq".parse::<ExecutionMode>().unwrap(), ExecutionMode::Sequential);
        assert_eq!("parallel".parse::<ExecutionMode>().unwrap(), ExecutionMode::Parallel);
        assert_eq!("all".parse::<ExecutionMode>().unwrap(), ExecutionMode::All);
        assert!(matches!(
            "distributed".parse::<ExecutionMode>(),
            Err(FlowError::Config(_))
        ));
    }

    #[test]
    fn default_is_parallel() {
        assert_eq!(ExecutionMode::default(), ExecutionMode::Parallel);
        assert_eq!(ExecutionMode::default().to_string(), "parallel");
    }
}
