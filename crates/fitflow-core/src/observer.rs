//! Unit events and the observer trait.

use crate::model::WorkUnit;

/// Event emitted while a run progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitEvent {
    /// A unit's input payload was decided.
    Resolved {
        unit: WorkUnit,
        /// `true` if the reference artifact was reused.
        reused: bool,
    },
    /// A unit's result artifact was persisted.
    Processed { unit: WorkUnit },
    /// Every fit of an image was processed.
    ImageCompleted { image: u32 },
}

/// Observer receiving unit events. Called from worker threads.
pub trait UnitObserver: Send + Sync {
    /// Receive an event.
    fn on_event(&self, event: &UnitEvent);
}
