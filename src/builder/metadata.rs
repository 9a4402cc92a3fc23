//! Chaincode package metadata (`metadata.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DetectError, DetectResult};

/// File name of the metadata document inside the metadata directory.
pub const METADATA_FILE: &str = "metadata.json";

/// The fields of `metadata.json` the builder cares about.
///
/// Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaincodeMetadata {
    /// Chaincode type, e.g. `k8s`
    #[serde(rename = "type")]
    pub chaincode_type: String,

    /// Package label
    #[serde(default)]
    pub label: String,
}

impl ChaincodeMetadata {
    /// Path of the metadata document for a metadata directory.
    pub fn path(metadata_dir: &Path) -> PathBuf {
        metadata_dir.join(METADATA_FILE)
    }

    /// Load the metadata document from a metadata directory.
    pub fn load(metadata_dir: &Path) -> DetectResult<Self> {
        let path = Self::path(metadata_dir);
        let contents = std::fs::read(&path).map_err(|source| DetectError::ReadMetadata {
            path: path.clone(),
            source,
        })?;

        serde_json::from_slice(&contents)
            .map_err(|source| DetectError::ParseMetadata { path, source })
    }
}
