//! Error type for pipeline runs.

use crate::model::ArtifactKey;

/// Error type for bootstrap, resolution, processing and orchestration.
///
/// A missing reference artifact is not an error: the resolver turns it into a
/// cold start. Every variant here is fatal for the task that raised it.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    /// An artifact could not be persisted.
    #[error("failed to write {key}: {reason}")]
    StorageWrite {
        /// Key being written.
        key: ArtifactKey,
        /// Underlying cause.
        reason: String,
    },

    /// An existing artifact could not be loaded.
    #[error("failed to read {key}: {reason}")]
    StorageRead {
        /// Key being read.
        key: ArtifactKey,
        /// Underlying cause.
        reason: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The worker pool could not be created.
    #[error("worker pool error: {0}")]
    Pool(String),

    /// The bootstrap phase did not finish.
    #[error("bootstrap failed: {0}")]
    Bootstrap(String),

    /// One or more images failed during a run.
    #[error("{count} image(s) failed {failed:?}; first error: {first}", count = .failed.len())]
    ImagesFailed {
        /// Indices of the failed images, ascending.
        failed: Vec<u32>,
        /// Error of the lowest failed image.
        first: Box<FlowError>,
    },
}

impl FlowError {
    /// Whether this error (or the first error it wraps) comes from the artifact store.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        match self {
            Self::StorageWrite { .. } | Self::StorageRead { .. } => true,
            Self::ImagesFailed { first, .. } => first.is_storage(),
            Self::Bootstrap(_) | Self::Config(_) | Self::Pool(_) => false,
        }
    }
}
