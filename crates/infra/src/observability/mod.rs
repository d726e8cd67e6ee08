//! Logging setup
//!
//! Installs a global `tracing` subscriber built from [`LoggingConfig`]:
//! an `EnvFilter` whose default directive comes from the config (overridden
//! by `RUST_LOG`), and a plain or JSON `fmt` layer on stderr.
//!
//! Request/response dumps produced in verbose mode are emitted on the
//! `dpa::wire` target, so they can be enabled independently, e.g.
//! `RUST_LOG=warn,dpa::wire=info`.

use std::io::IsTerminal;

use dpa_domain::LoggingConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

/// Build the filter: `RUST_LOG` when set and valid, the configured directive
/// otherwise.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(&config.filter)),
        _ => EnvFilter::new(&config.filter),
    }
}

/// Install the global subscriber.
///
/// Returns `false` when a global subscriber is already set (tests, embedding
/// applications); the existing one is left in place.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let fmt_layer = if config.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .boxed()
    };

    Registry::default().with(env_filter(config)).with(fmt_layer).try_init().is_ok()
}
