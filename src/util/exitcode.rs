//! Exit codes understood by the peer.
//!
//! The detect protocol is binary: anything other than [`MATCHED`] tells the
//! peer to move on to the next builder.

/// The builder can build and run the chaincode.
pub const MATCHED: i32 = 0;

/// The chaincode is not ours, or detection could not complete.
pub const FAILURE: i32 = 1;
