//! Logging set-up.
//!
//! The peer captures stderr of every builder it invokes, so output is plain
//! text, one line per event, without timestamps or colour. The level is driven
//! by the debug flag only; `RUST_LOG` is deliberately not consulted.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the filter directive for the given debug flag.
fn directive(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("{}={}", env!("CARGO_CRATE_NAME"), level)
}

/// Build a subscriber writing to `writer`.
pub fn subscriber<W>(debug: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive(debug)))
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .finish()
}

/// Install the stderr subscriber for the process.
pub fn init(debug: bool) {
    if let Err(e) = subscriber(debug, std::io::stderr).try_init() {
        eprintln!("failed to initialise logging: {}", e);
    }
}
