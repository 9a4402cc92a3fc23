//! Chaincode classification.
//!
//! The detect command only depends on the [`Classifier`] trait; [`Detect`] is
//! the classifier this builder ships with.

pub mod detect;
pub mod error;
pub mod metadata;

pub use detect::{Classifier, Detect, SUPPORTED_CHAINCODE_TYPE};
pub use error::{DetectError, DetectResult};
pub use metadata::ChaincodeMetadata;
