//! Kubernetes external chaincode builder for Hyperledger Fabric
//!
//! This crate provides the library behind the builder's `detect` binary:
//! argument handling, chaincode classification, and the mapping of the
//! result onto the exit code the peer reads.

pub mod builder;
pub mod ops;
pub mod util;

/// Test doubles for unit tests.
#[cfg(test)]
pub mod test_support;

pub use builder::{Classifier, Detect, DetectError};
pub use ops::detect::Outcome;
pub use util::{CmdContext, Config};
