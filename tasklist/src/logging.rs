//! Diagnostic tracing for the task list.
//!
//! Logs go to stderr so they never interleave with the list rendered on
//! stdout. Verbosity comes from `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber: `RUST_LOG` filter (default `warn`),
/// compact format, stderr.
///
/// A second call is a no-op.
///
/// # Example
/// ```bash
/// RUST_LOG=tasklist=debug tasklist --seed
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
