//! Concrete observer implementations.

use crossbeam_channel::Sender;
use tracing::{debug, info};

use crate::observer::{UnitEvent, UnitObserver};

/// Observer that sends events through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<UnitEvent>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(sender: Sender<UnitEvent>) -> Self {
        Self { sender }
    }
}

impl UnitObserver for ChannelObserver {
    fn on_event(&self, event: &UnitEvent) {
        // Dropped when the receiver is gone or a bounded channel is full.
        let _ = self.sender.try_send(*event);
    }
}

/// Observer that logs events through `tracing`.
pub struct LoggingObserver;

impl UnitObserver for LoggingObserver {
    fn on_event(&self, event: &UnitEvent) {
        match event {
            UnitEvent::Resolved { unit, reused } => {
                debug!(%unit, reused, "dependency resolved");
            }
            UnitEvent::Processed { unit } => debug!(%unit, "unit processed"),
            UnitEvent::ImageCompleted { image } => info!(image, "image completed"),
        }
    }
}

/// Observer that ignores every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitObserver for NoOpObserver {
    fn on_event(&self, _event: &UnitEvent) {}
}
