//! Work units, artifact keys, and payload documents.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{MOCK_RESULT, REFERENCE_IMAGE};

/// Opaque fit payload: a JSON object.
pub type Payload = Map<String, Value>;

/// One (image, fit) pair requiring computation. Both indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkUnit {
    /// Image index, `1..=image_count`.
    pub image: u32,
    /// Fit index, `1..=fit_count`.
    pub fit: u32,
}

impl WorkUnit {
    #[must_use]
    pub fn new(image: u32, fit: u32) -> Self {
        Self { image, fit }
    }

    /// Key of the reference artifact this unit depends on.
    #[must_use]
    pub fn reference_key(&self) -> ArtifactKey {
        ArtifactKey::reference(self.fit)
    }

    /// Key of the result artifact this unit produces.
    #[must_use]
    pub fn result_key(&self) -> ArtifactKey {
        ArtifactKey::result(*self)
    }
}

impl fmt::Display for WorkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(image={}, fit={})", self.image, self.fit)
    }
}

/// Enumerate every unit of an `image_count` x `fit_count` grid, images outer.
pub fn enumerate_units(image_count: u32, fit_count: u32) -> impl Iterator<Item = WorkUnit> {
    (1..=image_count).flat_map(move |image| (1..=fit_count).map(move |fit| WorkUnit::new(image, fit)))
}

/// Kind of persisted artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    /// Precomputed fit of the reference image.
    Reference,
    /// Output of processing one work unit.
    Result,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference => f.write_str("reference"),
            Self::Result => f.write_str("result"),
        }
    }
}

/// Structured address of an artifact in a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactKey {
    pub kind: ArtifactKind,
    pub image: u32,
    pub fit: u32,
}

impl ArtifactKey {
    /// Reference artifact for `fit`. Always attached to the reference image.
    #[must_use]
    pub fn reference(fit: u32) -> Self {
        Self {
            kind: ArtifactKind::Reference,
            image: REFERENCE_IMAGE,
            fit,
        }
    }

    /// Result artifact for `unit`.
    #[must_use]
    pub fn result(unit: WorkUnit) -> Self {
        Self {
            kind: ArtifactKind::Result,
            image: unit.image,
            fit: unit.fit,
        }
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(image={}, fit={})", self.kind, self.image, self.fit)
    }
}

/// Payload used when no reference exists for a fit.
#[must_use]
pub fn default_payload() -> Payload {
    let mut payload = Payload::new();
    payload.insert("config".into(), Value::from("default"));
    payload
}

/// Mock reference payload written by bootstrap for `fit`.
#[must_use]
pub fn reference_payload(fit: u32) -> Payload {
    let mut payload = Payload::new();
    payload.insert(
        "fit".into(),
        Value::from(format!("some_fit_data_for_fit{fit}_of_first_image")),
    );
    payload
}

/// Document persisted for each processed unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    /// Input payload the unit was computed from.
    pub fit_data: Payload,
    /// Computed value.
    pub result: Value,
}

impl ResultDocument {
    /// Combine an input payload with the mock computation result.
    #[must_use]
    pub fn compute(fit_data: Payload) -> Self {
        Self {
            fit_data,
            result: Value::from(MOCK_RESULT),
        }
    }

    /// Convert into a store payload.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        let mut payload = Payload::new();
        payload.insert("fit_data".into(), Value::Object(self.fit_data));
        payload.insert("result".into(), self.result);
        payload
    }

    /// Parse a stored payload back into a document.
    pub fn from_payload(payload: Payload) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerate_images_outer_fits_inner() {
        let units: Vec<_> = enumerate_units(2, 3).collect();
        assert_eq!(
            units,
            vec![
                WorkUnit::new(1, 1),
                WorkUnit::new(1, 2),
                WorkUnit::new(1, 3),
                WorkUnit::new(2, 1),
                WorkUnit::new(2, 2),
                WorkUnit::new(2, 3),
            ]
        );
    }

    #[test]
    fn enumerate_empty_grid() {
        assert_eq!(enumerate_units(0, 3).count(), 0);
        assert_eq!(enumerate_units(3, 0).count(), 0);
    }

    #[test]
    fn reference_key_ignores_image() {
        assert_eq!(WorkUnit::new(4, 2).reference_key(), WorkUnit::new(1, 2).reference_key());
        assert_eq!(WorkUnit::new(4, 2).reference_key().image, REFERENCE_IMAGE);
    }

    #[test]
    fn result_key_tracks_unit() {
        let key = WorkUnit::new(3, 2).result_key();
        assert_eq!(key.kind, ArtifactKind::Result);
        assert_eq!((key.image, key.fit), (3, 2));
        assert_eq!(key.to_string(), "result(image=3, fit=2)");
    }

    #[test]
    fn default_payload_shape() {
        assert_eq!(
            Value::Object(default_payload()),
            serde_json::json!({"config": "default"})
        );
    }

    #[test]
    fn reference_payload_names_fit() {
        assert_eq!(
            Value::Object(reference_payload(2)),
            serde_json::json!({"fit": "some_fit_data_for_fit2_of_first_image"})
        );
        assert_ne!(reference_payload(1), reference_payload(2));
    }

    #[test]
    fn result_document_payload_shape() {
        let doc = ResultDocument::compute(default_payload());
        let payload = doc.clone().into_payload();
        assert_eq!(
            Value::Object(payload.clone()),
            serde_json::json!({
                "fit_data": {"config": "default"},
                "result": "some_calculated_result"
            })
        );
        assert_eq!(ResultDocument::from_payload(payload).unwrap(), doc);
    }

    #[test]
    fn result_document_rejects_missing_fields() {
        assert!(ResultDocument::from_payload(default_payload()).is_err());
    }
}
