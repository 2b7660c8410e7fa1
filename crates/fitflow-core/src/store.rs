//! Artifact store abstraction and the in-memory implementation.
//!
//! Stores are shared by every worker of a run, so they must be `Send + Sync`.
//! Writing an existing key overwrites it.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::FlowError;
use crate::model::{ArtifactKey, ArtifactKind, Payload};

/// Key-value persistence for reference and result artifacts.
pub trait ArtifactStore: Send + Sync {
    /// Whether an artifact exists for `key`.
    fn exists(&self, key: &ArtifactKey) -> bool;

    /// Persist `payload` under `key`, replacing any previous document.
    fn put(&self, key: &ArtifactKey, payload: &Payload) -> Result<(), FlowError>;

    /// Load the artifact stored under `key`.
    fn get(&self, key: &ArtifactKey) -> Result<Payload, FlowError>;
}

/// Store backed by a map behind a read-write lock.
#[derive(Default)]
pub struct MemoryStore {
    artifacts: RwLock<BTreeMap<ArtifactKey, Payload>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.read().is_empty()
    }

    /// Number of stored artifacts of `kind`.
    #[must_use]
    pub fn count(&self, kind: ArtifactKind) -> usize {
        self.artifacts.read().keys().filter(|k| k.kind == kind).count()
    }

    /// Sorted keys of stored artifacts of `kind`.
    #[must_use]
    pub fn keys(&self, kind: ArtifactKind) -> Vec<ArtifactKey> {
        self.artifacts
            .read()
            .keys()
            .filter(|k| k.kind == kind)
            .copied()
            .collect()
    }
}

impl ArtifactStore for MemoryStore {
    fn exists(&self, key: &ArtifactKey) -> bool {
        self.artifacts.read().contains_key(key)
    }

    fn put(&self, key: &ArtifactKey, payload: &Payload) -> Result<(), FlowError> {
        self.artifacts.write().insert(*key, payload.clone());
        tracing::debug!(%key, "artifact stored in memory");
        Ok(())
    }

    fn get(&self, key: &ArtifactKey) -> Result<Payload, FlowError> {
        self.artifacts
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| FlowError::StorageRead {
                key: *key,
                reason: "not found".into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_payload, reference_payload, WorkUnit};

    #[test]
    fn put_then_get() {
        let store = MemoryStore::new();
        let key = ArtifactKey::reference(1);
        assert!(!store.exists(&key));
        store.put(&key, &reference_payload(1)).unwrap();
        assert!(store.exists(&key));
        assert_eq!(store.get(&key).unwrap(), reference_payload(1));
    }

    #[test]
    fn get_missing_is_read_error() {
        let store = MemoryStore::new();
        let result = store.get(&ArtifactKey::reference(7));
        assert!(matches!(result, Err(FlowError::StorageRead { .. })));
    }

    #[test]
    fn put_overwrites_existing_key() {
        let store = MemoryStore::new();
        let key = ArtifactKey::result(WorkUnit::new(2, 1));
        store.put(&key, &default_payload()).unwrap();
        store.put(&key, &reference_payload(1)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&key).unwrap(), reference_payload(1));
    }

    #[test]
    fn count_by_kind() {
        let store = MemoryStore::new();
        store.put(&ArtifactKey::reference(1), &reference_payload(1)).unwrap();
        store.put(&ArtifactKey::reference(2), &reference_payload(2)).unwrap();
        store
            .put(&ArtifactKey::result(WorkUnit::new(1, 1)), &default_payload())
            .unwrap();
        assert_eq!(store.count(ArtifactKind::Reference), 2);
        assert_eq!(store.count(ArtifactKind::Result), 1);
        assert_eq!(
            store.keys(ArtifactKind::Reference),
            vec![ArtifactKey::reference(1), ArtifactKey::reference(2)]
        );
        assert!(!store.is_empty());
    }
}
