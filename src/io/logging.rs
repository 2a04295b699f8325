//! Tracing subscriber setup for the command-line binary

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a given verbosity
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install a stderr subscriber; `RUST_LOG` takes precedence over `verbose`
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_span_events(FmtSpan::CLOSE),
        )
        .with(env_filter)
        .try_init()
        .is_ok()
}
