//! Tracing subscriber setup.
//!
//! The demo's premise is that every log line carries enough context to jump
//! straight to the emitting code, so the fmt layer enables target, file, and
//! line number. Timing comes from the subscriber's timestamps together with
//! tower-http's per-request spans.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "faultbox=info,tower_http=info";

/// Initialize the process-wide subscriber.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init();
}
