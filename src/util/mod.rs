//! Shared utilities

pub mod config;
pub mod context;
pub mod exitcode;
pub mod log;

pub use config::Config;
pub use context::CmdContext;
