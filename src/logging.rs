//! Tracing subscriber setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `finance_tracker=debug`
pub const LOG_ENV: &str = "FINTRACK_LOG";

const DEFAULT_FILTER: &str = "finance_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global stderr subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // a subscriber installed elsewhere (tests) wins
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
