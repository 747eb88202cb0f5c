//! Logging setup.
//!
//! Quiet by default (`warn`). `RUST_LOG` overrides the filter:
//! ```bash
//! RUST_LOG=generic_addition=trace generic-addition
//! ```
//! Everything is written to stderr so stdout only carries the sums.

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Only the first call has any effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        // another subscriber may already be set (tests, embedding)
        let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
    });
}
