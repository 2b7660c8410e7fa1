//! Shared helpers for the cross-crate integration tests.

use crossbeam_channel::{Receiver, Sender};

use fitflow_core::error::FlowError;
use fitflow_core::model::{ArtifactKey, ArtifactKind, Payload, ResultDocument, WorkUnit};
use fitflow_core::store::{ArtifactStore, MemoryStore};

/// Input payload recorded in the result artifact of `unit`.
pub fn recorded_input(store: &dyn ArtifactStore, unit: WorkUnit) -> Payload {
    let payload = store
        .get(&ArtifactKey::result(unit))
        .unwrap_or_else(|e| panic!("no result for {unit}: {e}"));
    ResultDocument::from_payload(payload)
        .unwrap_or_else(|e| panic!("malformed result for {unit}: {e}"))
        .fit_data
}

/// Store that holds back the write of one reference artifact.
///
/// `put` of the gated key announces itself on `entered`, then blocks until a
/// message arrives on `release`. Every other operation goes straight to the
/// inner store.
pub struct GatedStore {
    inner: MemoryStore,
    gated: ArtifactKey,
    entered: Sender<()>,
    release: Receiver<()>,
}

/// Handles for driving a [`GatedStore`] from the test thread.
pub struct Gate {
    /// Receives one message when the gated write starts.
    pub entered: Receiver<()>,
    /// Send one message to let the gated write proceed.
    pub release: Sender<()>,
}

impl GatedStore {
    /// Gate the reference artifact of `fit`.
    pub fn gate_reference(fit: u32) -> (Self, Gate) {
        let (entered_tx, entered_rx) = crossbeam_channel::bounded(1);
        let (release_tx, release_rx) = crossbeam_channel::bounded(1);
        let store = Self {
            inner: MemoryStore::new(),
            gated: ArtifactKey::reference(fit),
            entered: entered_tx,
            release: release_rx,
        };
        let gate = Gate {
            entered: entered_rx,
            release: release_tx,
        };
        (store, gate)
    }

    /// Number of stored artifacts of `kind`.
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.inner.count(kind)
    }
}

impl ArtifactStore for GatedStore {
    fn exists(&self, key: &ArtifactKey) -> bool {
        self.inner.exists(key)
    }

    fn put(&self, key: &ArtifactKey, payload: &Payload) -> Result<(), FlowError> {
        if *key == self.gated {
            let _ = self.entered.send(());
            let _ = self.release.recv();
        }
        self.inner.put(key, payload)
    }

    fn get(&self, key: &ArtifactKey) -> Result<Payload, FlowError> {
        self.inner.get(key)
    }
}
