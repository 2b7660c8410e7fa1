//! Shared collaborators of a run.

use tracing::info;

use fitflow_core::error::FlowError;
use fitflow_core::model::WorkUnit;
use fitflow_core::observer::{UnitEvent, UnitObserver};
use fitflow_core::processor::process_unit;
use fitflow_core::resolver::{resolve, Resolution};
use fitflow_core::store::ArtifactStore;
use fitflow_core::workload::Workload;

/// Store, workload and observer used by every orchestrator.
///
/// Only borrowed references: tasks share no mutable state besides the store.
#[derive(Clone, Copy)]
pub struct RunContext<'a> {
    pub store: &'a dyn ArtifactStore,
    pub workload: &'a dyn Workload,
    pub observer: &'a dyn UnitObserver,
}

impl<'a> RunContext<'a> {
    #[must_use]
    pub fn new(
        store: &'a dyn ArtifactStore,
        workload: &'a dyn Workload,
        observer: &'a dyn UnitObserver,
    ) -> Self {
        Self {
            store,
            workload,
            observer,
        }
    }

    /// Resolve the input of `unit` and notify the observer.
    pub fn resolve_unit(&self, unit: WorkUnit) -> Result<Resolution, FlowError> {
        info!("Processing {}...", unit.result_key());
        let resolution = resolve(self.store, unit.fit)?;
        self.observer.on_event(&UnitEvent::Resolved {
            unit,
            reused: resolution.is_reuse(),
        });
        Ok(resolution)
    }

    /// Process `unit` with its resolved input and notify the observer.
    pub fn process_unit(&self, unit: WorkUnit, resolution: Resolution) -> Result<(), FlowError> {
        process_unit(self.store, self.workload, unit, resolution.into_payload())?;
        self.observer.on_event(&UnitEvent::Processed { unit });
        Ok(())
    }

    /// Notify the observer that every fit of `image` was processed.
    pub fn complete_image(&self, image: u32) {
        self.observer.on_event(&UnitEvent::ImageCompleted { image });
    }
}
