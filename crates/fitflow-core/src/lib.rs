//! # fitflow-core
//!
//! Core library for the fitflow batch pipeline: a grid of (image, fit) work
//! units, where each unit reuses the reference image's fit when available or
//! cold-starts from a default configuration, then persists a result artifact.

pub mod bootstrap;
pub mod constants;
pub mod error;
pub mod fs_store;
pub mod model;
pub mod observer;
pub mod observers;
pub mod options;
pub mod processor;
pub mod resolver;
pub mod store;
pub mod workload;

// Re-exports
pub use bootstrap::run_bootstrap;
pub use constants::{exit_codes, REFERENCE_IMAGE};
pub use error::FlowError;
pub use fs_store::FsStore;
pub use model::{ArtifactKey, ArtifactKind, Payload, ResultDocument, WorkUnit};
pub use observer::{UnitEvent, UnitObserver};
pub use options::{BootstrapMode, PipelineConfig};
pub use processor::process_unit;
pub use resolver::{resolve, Resolution};
pub use store::{ArtifactStore, MemoryStore};
pub use workload::{FixedDelay, NoDelay, RandomDelay, Workload};
