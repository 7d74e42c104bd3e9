//! Mapping from decoded records to platform notification descriptors.

use push_host::{NotificationAction, NotificationData, NotificationDescriptor};

use crate::{config::RuntimeConfig, decode::NotificationRecord};

/// Title applied when the payload carried none.
pub const DEFAULT_TITLE: &str = "New Message";
/// Body applied when the payload carried none.
pub const DEFAULT_BODY: &str = "You have a new message";
/// Identifier of the single attached action.
pub const OPEN_ACTION_ID: &str = "open";
/// Label of the single attached action.
pub const OPEN_ACTION_LABEL: &str = "Open Chat";
/// Fixed vibration pattern; hosts without vibration support ignore it.
pub const VIBRATION_PATTERN_MS: [u32; 3] = [100, 50, 100];

/// Renders `record` into a platform-facing descriptor.
///
/// Defaults apply independently per field; the badge always uses the
/// configured app icon. The embedded [`NotificationData`] is self-contained
/// so activation can be handled after a process restart.
pub fn render(record: &NotificationRecord, config: &RuntimeConfig) -> NotificationDescriptor {
    NotificationDescriptor {
        title: record
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        body: record
            .body
            .clone()
            .unwrap_or_else(|| DEFAULT_BODY.to_string()),
        icon: record.icon.clone().unwrap_or_else(|| config.icon.clone()),
        badge: config.icon.clone(),
        actions: vec![NotificationAction {
            id: OPEN_ACTION_ID.to_string(),
            label: OPEN_ACTION_LABEL.to_string(),
        }],
        vibration_ms: VIBRATION_PATTERN_MS.to_vec(),
        data: NotificationData {
            url: record
                .url
                .clone()
                .unwrap_or_else(|| config.fallback_url.clone()),
            chat_id: record.chat_id.clone(),
        },
    }
}
