//! Logging setup shared by the binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the library and both binaries log
/// at `info`, or `debug` when `verbose` is set.
pub fn init(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Filter directives covering the library and the binary targets.
fn default_directives(level: &str) -> String {
    ["iconkit", "make_transparent", "resize_icons"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
