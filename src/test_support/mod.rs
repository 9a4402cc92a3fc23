//! Test doubles for the detect command.
//!
//! [`StubClassifier`] stands in for the metadata-reading classifier and
//! records how it was called; [`CapturedLogs`] collects formatted log lines
//! from a [`subscriber`](crate::util::log::subscriber).

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::builder::{Classifier, DetectError, DetectResult};
use crate::util::CmdContext;

/// What a [`StubClassifier`] reports.
#[derive(Debug, Clone)]
pub enum StubResult {
    Matched,
    Unsupported,
    Fails(String),
}

/// A classifier with a fixed answer.
#[derive(Debug)]
pub struct StubClassifier {
    result: StubResult,
    calls: Mutex<Vec<(bool, PathBuf, PathBuf)>>,
}

impl StubClassifier {
    pub fn new(result: StubResult) -> Self {
        StubClassifier {
            result,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn matched() -> Self {
        Self::new(StubResult::Matched)
    }

    pub fn unsupported() -> Self {
        Self::new(StubResult::Unsupported)
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(StubResult::Fails(message.into()))
    }

    /// Recorded `(debug, source_dir, metadata_dir)` of every call.
    pub fn calls(&self) -> Vec<(bool, PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Classifier for StubClassifier {
    fn classify(
        &self,
        ctx: &CmdContext,
        source_dir: &Path,
        metadata_dir: &Path,
    ) -> DetectResult<()> {
        self.calls.lock().unwrap().push((
            ctx.debug(),
            source_dir.to_path_buf(),
            metadata_dir.to_path_buf(),
        ));

        match &self.result {
            StubResult::Matched => Ok(()),
            StubResult::Unsupported => Err(DetectError::UnsupportedChaincodeType {
                found: "golang".to_string(),
            }),
            StubResult::Fails(message) => Err(DetectError::Other(anyhow::anyhow!(
                "{}",
                message
            ))),
        }
    }
}

/// In-memory log sink.
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
