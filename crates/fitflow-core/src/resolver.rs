//! Dependency resolution: reuse the reference fit or cold-start.
//!
//! The existence check and the load are not synchronized with bootstrap. A
//! resolver that runs before a reference is written sees it as absent and
//! takes the default payload; that outcome is valid, not an error.

use tracing::info;

use crate::error::FlowError;
use crate::model::{default_payload, ArtifactKey, Payload};
use crate::store::ArtifactStore;

/// Input payload decided for one unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The reference artifact for the fit was loaded.
    Reused(Payload),
    /// No reference existed; the default payload is used.
    ColdStart(Payload),
}

impl Resolution {
    /// Whether the reference artifact was reused.
    #[must_use]
    pub fn is_reuse(&self) -> bool {
        matches!(self, Self::Reused(_))
    }

    #[must_use]
    pub fn payload(&self) -> &Payload {
        match self {
            Self::Reused(p) | Self::ColdStart(p) => p,
        }
    }

    #[must_use]
    pub fn into_payload(self) -> Payload {
        match self {
            Self::Reused(p) | Self::ColdStart(p) => p,
        }
    }
}

/// Decide the input payload for `fit`, whatever image is asking.
///
/// Only a failed load of an existing reference is an error.
pub fn resolve(store: &dyn ArtifactStore, fit: u32) -> Result<Resolution, FlowError> {
    let key = ArtifactKey::reference(fit);
    if store.exists(&key) {
        info!("Loading previous fit from {key}...");
        Ok(Resolution::Reused(store.get(&key)?))
    } else {
        info!("Starting from default configuration for fit {fit}...");
        Ok(Resolution::ColdStart(default_payload()))
    }
}
