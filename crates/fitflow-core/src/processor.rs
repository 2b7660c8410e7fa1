//! Unit processing: mock calculation and result persistence.

use tracing::info;

use crate::error::FlowError;
use crate::model::{Payload, ResultDocument, WorkUnit};
use crate::store::ArtifactStore;
use crate::workload::Workload;

/// Compute the result for `unit` from `input`, persist it, then perform the workload.
///
/// Storage failure is returned as-is; nothing is retried.
pub fn process_unit(
    store: &dyn ArtifactStore,
    workload: &dyn Workload,
    unit: WorkUnit,
    input: Payload,
) -> Result<(), FlowError> {
    let key = unit.result_key();
    info!("Carrying out magic calculations for {key}...");

    let document = ResultDocument::compute(input);
    store.put(&key, &document.into_payload())?;

    workload.perform(&unit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{default_payload, reference_payload, ArtifactKey};
    use crate::store::MemoryStore;
    use crate::workload::NoDelay;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn persists_input_and_result() {
        let store = MemoryStore::new();
        let unit = WorkUnit::new(2, 3);
        process_unit(&store, &NoDelay, unit, reference_payload(3)).unwrap();

        let stored = store.get(&ArtifactKey::result(unit)).unwrap();
        let doc = ResultDocument::from_payload(stored).unwrap();
        assert_eq!(doc.fit_data, reference_payload(3));
        assert_eq!(doc.result, "some_calculated_result");
    }

    #[test]
    fn performs_workload_once() {
        struct Counting(AtomicUsize);
        impl Workload for Counting {
            fn perform(&self, _unit: &WorkUnit) {
                self.0.fetch_add(1, Ordering::Relaxed);
            }
            fn describe(&self) -> String {
                "counting".into()
            }
        }

        let store = MemoryStore::new();
        let workload = Counting(AtomicUsize::new(0));
        process_unit(&store, &workload, WorkUnit::new(1, 1), default_payload()).unwrap();
        assert_eq!(workload.0.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn write_failure_skips_workload() {
        struct ReadOnly;
        impl ArtifactStore for ReadOnly {
            fn exists(&self, _key: &ArtifactKey) -> bool {
                false
            }
            fn put(&self, key: &ArtifactKey, _payload: &Payload) -> Result<(), FlowError> {
                Err(FlowError::StorageWrite {
                    key: *key,
                    reason: "read-only".into(),
                })
            }
            fn get(&self, key: &ArtifactKey) -> Result<Payload, FlowError> {
                Err(FlowError::StorageRead {
                    key: *key,
                    reason: "not found".into(),
                })
            }
        }
        struct Panicking;
        impl Workload for Panicking {
            fn perform(&self, _unit: &WorkUnit) {
                panic!("workload must not run after a failed write");
            }
            fn describe(&self) -> String {
                "panicking".into()
            }
        }

        let result = process_unit(&ReadOnly, &Panicking, WorkUnit::new(1, 1), default_payload());
        assert!(matches!(result, Err(FlowError::StorageWrite { .. })));
    }
}
