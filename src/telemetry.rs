// ============================================================================
// Telemetry
// Console subscriber for the calculator's tracing output
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber at `INFO` level.
///
/// Returns `false` when a global subscriber is already set.
pub fn init_tracing() -> bool {
    init_tracing_with_level(Level::INFO)
}

/// Install a formatting subscriber that records spans and events up to `level`.
pub fn init_tracing_with_level(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
