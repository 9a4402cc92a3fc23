//! High-level operations

pub mod detect;

pub use detect::{execute, Outcome};
