// src/infra/logger.rs — Structured logging with tracing

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `STOCKROOM_LOG` wins over `RUST_LOG`;
/// with neither set, everything at `level` and above is emitted.
pub fn init_logging(level: &str) {
    let filter = std::env::var("STOCKROOM_LOG")
        .ok()
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
