//! Time helpers shared across host contracts and adapters.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current unix timestamp in milliseconds.
///
/// Hosts feed this into the runtime entry points; tests pass fixed
/// timestamps instead.
pub fn unix_time_ms_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
