//! Bootstrap: materialize one reference artifact per fit.

use tracing::info;

use crate::error::FlowError;
use crate::model::{reference_payload, ArtifactKey};
use crate::store::ArtifactStore;

/// Write the reference artifact of every fit in `1..=fit_count`, in fit order.
///
/// Stops at the first storage failure.
pub fn run_bootstrap(store: &dyn ArtifactStore, fit_count: u32) -> Result<(), FlowError> {
    info!(fit_count, "creating reference artifacts for the reference image");
    for fit in 1..=fit_count {
        store.put(&ArtifactKey::reference(fit), &reference_payload(fit))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArtifactKind, Payload};
    use crate::store::MemoryStore;

    #[test]
    fn writes_one_reference_per_fit() {
        let store = MemoryStore::new();
        run_bootstrap(&store, 3).unwrap();
        assert_eq!(store.count(ArtifactKind::Reference), 3);
        assert_eq!(store.count(ArtifactKind::Result), 0);
        for fit in 1..=3 {
            assert_eq!(
                store.get(&ArtifactKey::reference(fit)).unwrap(),
                reference_payload(fit)
            );
        }
    }

    #[test]
    fn references_are_stable() {
        let store = MemoryStore::new();
        run_bootstrap(&store, 2).unwrap();
        let key = ArtifactKey::reference(2);
        assert_eq!(store.get(&key).unwrap(), store.get(&key).unwrap());
    }

    #[test]
    fn storage_failure_is_fatal() {
        struct FailOnSecond(MemoryStore);
        impl ArtifactStore for FailOnSecond {
            fn exists(&self, key: &ArtifactKey) -> bool {
                self.0.exists(key)
            }
            fn put(&self, key: &ArtifactKey, payload: &Payload) -> Result<(), FlowError> {
                if key.fit == 2 {
                    return Err(FlowError::StorageWrite {
                        key: *key,
                        reason: "disk full".into(),
                    });
                }
                self.0.put(key, payload)
            }
            fn get(&self, key: &ArtifactKey) -> Result<Payload, FlowError> {
                self.0.get(key)
            }
        }

        let store = FailOnSecond(MemoryStore::new());
        let result = run_bootstrap(&store, 3);
        assert!(matches!(result, Err(FlowError::StorageWrite { .. })));
        assert_eq!(store.0.count(ArtifactKind::Reference), 1);
    }
}
