//! JSON-file artifact store.
//!
//! Layout:
//! - references: `<prediction_dir>/file1_fit{j}.prediction.json`
//! - results: `<output_dir>/file{i}_fit{j}.output.json`
//!
//! Documents are written to a temporary sibling and renamed into place, so a
//! file that exists is always a complete document.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::FlowError;
use crate::model::{ArtifactKey, ArtifactKind, Payload};
use crate::store::ArtifactStore;

/// Store persisting each artifact as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct FsStore {
    output_dir: PathBuf,
    prediction_dir: PathBuf,
}

impl FsStore {
    /// Open a store rooted at the given directories, creating them if needed.
    pub fn open(
        output_dir: impl Into<PathBuf>,
        prediction_dir: impl Into<PathBuf>,
    ) -> std::io::Result<Self> {
        let store = Self {
            output_dir: output_dir.into(),
            prediction_dir: prediction_dir.into(),
        };
        std::fs::create_dir_all(&store.output_dir)?;
        std::fs::create_dir_all(&store.prediction_dir)?;
        Ok(store)
    }

    /// Directory holding result artifacts.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directory holding reference artifacts.
    #[must_use]
    pub fn prediction_dir(&self) -> &Path {
        &self.prediction_dir
    }

    /// File path for `key`.
    #[must_use]
    pub fn path_for(&self, key: &ArtifactKey) -> PathBuf {
        match key.kind {
            ArtifactKind::Reference => self
                .prediction_dir
                .join(format!("file{}_fit{}.prediction.json", key.image, key.fit)),
            ArtifactKind::Result => self
                .output_dir
                .join(format!("file{}_fit{}.output.json", key.image, key.fit)),
        }
    }
}

impl ArtifactStore for FsStore {
    fn exists(&self, key: &ArtifactKey) -> bool {
        let path = self.path_for(key);
        match path.try_exists() {
            Ok(found) => found,
            Err(e) => {
                warn!("Cannot check {}: {e}; treating as absent", path.display());
                false
            }
        }
    }

    fn put(&self, key: &ArtifactKey, payload: &Payload) -> Result<(), FlowError> {
        let write_err = |reason: String| FlowError::StorageWrite { key: *key, reason };

        let path = self.path_for(key);
        let content = serde_json::to_string_pretty(payload).map_err(|e| write_err(e.to_string()))?;

        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, content).map_err(|e| write_err(e.to_string()))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(write_err(e.to_string()));
        }

        info!("Data saved to {}", path.display());
        Ok(())
    }

    fn get(&self, key: &ArtifactKey) -> Result<Payload, FlowError> {
        let read_err = |reason: String| FlowError::StorageRead { key: *key, reason };

        let path = self.path_for(key);
        let content = std::fs::read_to_string(&path).map_err(|e| read_err(e.to_string()))?;
        let payload = serde_json::from_str(&content).map_err(|e| read_err(e.to_string()))?;

        debug!("Data loaded from {}", path.display());
        Ok(payload)
    }
}
