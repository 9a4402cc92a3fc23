//! The classifier contract and this builder's implementation of it.

use std::path::Path;

use super::{ChaincodeMetadata, DetectError, DetectResult};
use crate::util::CmdContext;

/// Chaincode type handled by this builder.
pub const SUPPORTED_CHAINCODE_TYPE: &str = "k8s";

/// Decides whether a chaincode package belongs to this builder.
///
/// `Ok(())` means the package is ours. A package that belongs to another
/// builder must be reported as [`DetectError::UnsupportedChaincodeType`];
/// every other error is treated as a real failure.
pub trait Classifier {
    fn classify(
        &self,
        ctx: &CmdContext,
        source_dir: &Path,
        metadata_dir: &Path,
    ) -> DetectResult<()>;
}

/// Classifies chaincode by the `type` field of its `metadata.json`.
///
/// The source directory is never inspected.
#[derive(Debug, Clone)]
pub struct Detect {
    chaincode_type: String,
}

impl Detect {
    /// Create a classifier accepting the given chaincode type.
    pub fn new(chaincode_type: impl Into<String>) -> Self {
        Detect {
            chaincode_type: chaincode_type.into(),
        }
    }

    /// The chaincode type this classifier accepts.
    pub fn chaincode_type(&self) -> &str {
        &self.chaincode_type
    }
}

impl Default for Detect {
    fn default() -> Self {
        Detect::new(SUPPORTED_CHAINCODE_TYPE)
    }
}

impl Classifier for Detect {
    fn classify(
        &self,
        ctx: &CmdContext,
        _source_dir: &Path,
        metadata_dir: &Path,
    ) -> DetectResult<()> {
        ctx.check_cancelled()?;

        let metadata = ChaincodeMetadata::load(metadata_dir)?;

        if !metadata
            .chaincode_type
            .eq_ignore_ascii_case(&self.chaincode_type)
        {
            return Err(DetectError::UnsupportedChaincodeType {
                found: metadata.chaincode_type,
            });
        }

        Ok(())
    }
}
