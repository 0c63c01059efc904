// ============================================================================
// Logging Bootstrap
// Installs a tracing subscriber for binaries, demos and benchmarks
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "fixed_money=info";

/// Install a formatted tracing subscriber filtered by `RUST_LOG`.
///
/// Returns `false` when a global subscriber was already installed, so calling
/// it more than once is harmless.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
