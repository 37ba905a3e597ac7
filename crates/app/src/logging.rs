//! Tracing subscriber setup for the binary.
//!
//! Library crates only emit `tracing` events; this is the single place a subscriber
//! is installed.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 5] = ["app", "prep_core", "services", "storage", "ui"];

/// Install the global subscriber, writing compact lines to stderr.
///
/// An explicit `level` wins over `RUST_LOG`; without either, our crates log at `info`
/// and dependencies at `warn`. Calling this twice leaves the first subscriber in place.
pub fn init_logging(level: Option<&str>) {
    let filter = build_env_filter(level);
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn build_env_filter(level: Option<&str>) -> EnvFilter {
    if let Some(level) = level {
        return EnvFilter::try_new(directives(level))
            .unwrap_or_else(|_| EnvFilter::new(directives("info")));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives("info")))
}

/// `warn` for dependencies, `level` for the workspace crates.
fn directives(level: &str) -> String {
    let ours = CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    format!("warn,{ours}")
}
