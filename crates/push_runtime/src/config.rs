//! Runtime composition settings.

/// Default dedup window for repeated conversation notifications.
pub const DEFAULT_DEDUP_WINDOW_MS: u64 = 3_000;
/// Default bound on the dedup seen-set size.
pub const DEFAULT_SEEN_CAPACITY: usize = 64;
/// Default icon/badge asset used when a payload carries none.
pub const DEFAULT_ICON_PATH: &str = "/icons/icon-192.png";
/// Default navigation URL when a payload carries none.
pub const DEFAULT_NAVIGATION_URL: &str = "/";

/// Settings the embedding application supplies when composing the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Window within which repeated notifications for one conversation are
    /// treated as transport redeliveries and suppressed.
    pub dedup_window_ms: u64,
    /// Upper bound on remembered conversations; oldest entries are evicted.
    pub seen_capacity: usize,
    /// Icon/badge asset path applied when the payload has no icon.
    pub icon: String,
    /// Navigation URL applied when the payload has no URL.
    pub fallback_url: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            dedup_window_ms: DEFAULT_DEDUP_WINDOW_MS,
            seen_capacity: DEFAULT_SEEN_CAPACITY,
            icon: DEFAULT_ICON_PATH.to_string(),
            fallback_url: DEFAULT_NAVIGATION_URL.to_string(),
        }
    }
}
