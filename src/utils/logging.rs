// ============================================================================
// Logging Setup
// Optional subscriber installation for binaries and tests using the crate
// ============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `default_filter` (for example `"precise_money=debug"`).
///
/// Returns `false` if a global subscriber is already set.
pub fn init(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}
