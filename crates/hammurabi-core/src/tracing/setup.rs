//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "HAMMURABI_LOG";

/// Initialize the Hammurabi tracing/logging system.
///
/// Reads `HAMMURABI_LOG` for per-target log levels, e.g.
/// `HAMMURABI_LOG=hammurabi_engine=debug,hammurabi_core=warn`.
/// Falls back to `hammurabi=info` if unset or invalid.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("hammurabi=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        ::tracing::info!("tracing initialized twice without panicking");
    }
}
