//! Tracing subscriber setup.
//!
//! Log lines never go to stdout; stdout is reserved for result records.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Build the fmt subscriber writing to `writer`.
///
/// `RUST_LOG` overrides the default level, which is `debug` when `debug` is
/// set and `info` otherwise.
pub fn build_subscriber<W>(debug: bool, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let log_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Install the global subscriber, logging to stderr.
pub fn init_logging(debug: bool) {
    build_subscriber(debug, std::io::stderr).init();
}
