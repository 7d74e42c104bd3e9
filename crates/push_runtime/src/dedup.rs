//! Best-effort suppression of transport redeliveries per conversation.

use std::collections::VecDeque;

/// Process-local seen set over recent conversation notifications.
///
/// The transport may redeliver or reorder push messages; this guard keeps a
/// bounded window of recently surfaced conversations so the same chat does
/// not double-toast. It is in-memory only and resets with the process;
/// exactly-once across restarts or devices is a server-side concern.
#[derive(Debug)]
pub struct DedupGuard {
    window_ms: u64,
    capacity: usize,
    seen: VecDeque<(String, u64)>,
}

impl DedupGuard {
    /// Creates a guard suppressing repeats within `window_ms`, remembering at
    /// most `capacity` conversations.
    pub fn new(window_ms: u64, capacity: usize) -> Self {
        Self {
            window_ms,
            capacity: capacity.max(1),
            seen: VecDeque::new(),
        }
    }

    /// Decides whether a notification for `chat_id` should be suppressed and
    /// records it when admitted.
    ///
    /// `None` never suppresses: system notifications are not deduped. The
    /// size bound is enforced on every write, evicting the oldest entry.
    pub fn should_suppress(&mut self, chat_id: Option<&str>, now_ms: u64) -> bool {
        let Some(chat_id) = chat_id else {
            return false;
        };
        self.evict_expired(now_ms);
        if self.seen.iter().any(|(seen_id, _)| seen_id == chat_id) {
            return true;
        }
        if self.seen.len() >= self.capacity {
            self.seen.pop_front();
        }
        self.seen.push_back((chat_id.to_string(), now_ms));
        false
    }

    /// Number of conversations currently remembered.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no conversation is currently remembered.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    fn evict_expired(&mut self, now_ms: u64) {
        // Entries are appended in arrival order, so expiry can stop at the
        // first still-fresh entry.
        while let Some((_, recorded_ms)) = self.seen.front() {
            if now_ms.saturating_sub(*recorded_ms) >= self.window_ms {
                self.seen.pop_front();
            } else {
                break;
            }
        }
    }
}

impl Default for DedupGuard {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_DEDUP_WINDOW_MS,
            crate::config::DEFAULT_SEEN_CAPACITY,
        )
    }
}
