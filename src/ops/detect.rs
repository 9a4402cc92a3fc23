//! The detect phase of the external builder protocol.
//!
//! The peer runs `detect CHAINCODE_SOURCE_DIR CHAINCODE_METADATA_DIR` for each
//! configured builder in turn until one exits with 0. Exit code 1 covers both
//! "not mine" and real failures; the two differ only in what gets logged.
//! "Not mine" is routine while the peer walks its builder list, so it is kept
//! out of the log entirely.

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use thiserror::Error;

use crate::builder::{Classifier, DetectError, DetectResult};
use crate::util::{exitcode, CmdContext};

/// Logged when the builder is invoked with the wrong arguments.
pub const USAGE: &str = "Expected CHAINCODE_SOURCE_DIR and CHAINCODE_METADATA_DIR arguments";

/// Positional arguments of the detect phase.
///
/// Paths are taken verbatim; validating them is the classifier's job.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "detect", disable_help_flag = true, disable_version_flag = true)]
pub struct DetectArgs {
    /// Chaincode source directory
    #[arg(value_name = "CHAINCODE_SOURCE_DIR")]
    chaincode_source_dir: OsString,

    /// Chaincode metadata directory
    #[arg(value_name = "CHAINCODE_METADATA_DIR")]
    chaincode_metadata_dir: OsString,
}

impl DetectArgs {
    pub fn chaincode_source_dir(&self) -> &Path {
        Path::new(&self.chaincode_source_dir)
    }

    pub fn chaincode_metadata_dir(&self) -> &Path {
        Path::new(&self.chaincode_metadata_dir)
    }
}

/// The builder was invoked incorrectly.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("{} (got {found} arguments)", USAGE)]
    ArgumentCount { found: usize },

    #[error("{}", USAGE)]
    Invalid(#[from] clap::Error),
}

/// Parse the raw process arguments, program name included.
pub fn parse_args<I, T>(args: I) -> Result<DetectArgs, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let [program, source_dir, metadata_dir]: [OsString; 3] =
        args.try_into().map_err(|args: Vec<OsString>| UsageError::ArgumentCount {
            found: args.len().saturating_sub(1),
        })?;

    // `--` keeps clap from reading hyphen-leading paths as flags.
    let argv = [program, OsString::from("--"), source_dir, metadata_dir];
    Ok(DetectArgs::try_parse_from(argv)?)
}

/// Result of one detect invocation.
#[derive(Debug)]
pub enum Outcome {
    /// Wrong arguments; the classifier was not run
    Usage,
    /// The chaincode belongs to this builder
    Matched,
    /// The chaincode belongs to some other builder
    NotMatched,
    /// Classification failed
    Failed(DetectError),
}

impl Outcome {
    /// Classify a classifier result.
    pub fn from_result(result: DetectResult<()>) -> Self {
        match result {
            Ok(()) => Outcome::Matched,
            Err(e) if e.is_unsupported_chaincode_type() => Outcome::NotMatched,
            Err(e) => Outcome::Failed(e),
        }
    }

    /// Process exit code reported to the peer.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Matched => exitcode::MATCHED,
            Outcome::Usage | Outcome::NotMatched | Outcome::Failed(_) => exitcode::FAILURE,
        }
    }
}

/// Render an error with its full cause chain on one line.
fn render(err: &DetectError) -> String {
    anyhow::Chain::new(err)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}

/// Run one detect invocation.
///
/// Never terminates the process; the caller exits with
/// [`Outcome::exit_code`].
pub fn execute<I, T, C>(args: I, ctx: &CmdContext, classifier: &C) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    C: Classifier + ?Sized,
{
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(_) => {
            tracing::error!("{}", USAGE);
            return Outcome::Usage;
        }
    };

    let source_dir = args.chaincode_source_dir();
    let metadata_dir = args.chaincode_metadata_dir();

    tracing::debug!("Chaincode source directory: {}", source_dir.display());
    tracing::debug!("Chaincode metadata directory: {}", metadata_dir.display());

    let outcome = Outcome::from_result(classifier.classify(ctx, source_dir, metadata_dir));

    if let Outcome::Failed(e) = &outcome {
        tracing::error!("Error detecting chaincode: {}", render(e));
    }

    outcome
}
