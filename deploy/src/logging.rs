use std::sync::Once;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn,deploy=info";

/// Installs the global subscriber. Everything goes to stderr, stdout only
/// ever carries the deployed address.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn initialize(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

/// Like [`initialize`], but later calls are ignored.
///
/// Useful for tests.
pub fn initialize_reentrant(default_filter: &str) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| initialize(default_filter));
}
