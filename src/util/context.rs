//! Execution context for a single detect invocation.
//!
//! Carries the debug flag and a cancellation point down to collaborators that
//! may block on filesystem I/O.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::builder::DetectError;
use crate::util::Config;

/// Context passed to the classifier.
///
/// Clones share the same cancellation state.
#[derive(Debug, Clone, Default)]
pub struct CmdContext {
    debug: bool,
    cancelled: Arc<AtomicBool>,
}

impl CmdContext {
    /// Create a context with the given debug flag.
    pub fn new(debug: bool) -> Self {
        CmdContext {
            debug,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a context from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.debug)
    }

    /// Whether debug logging is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fail with [`DetectError::Cancelled`] if cancellation was requested.
    pub fn check_cancelled(&self) -> Result<(), DetectError> {
        if self.is_cancelled() {
            return Err(DetectError::Cancelled);
        }
        Ok(())
    }
}
