//! Inbound push-payload decoding.

use serde::Deserialize;
use thiserror::Error;

/// Decode-stage failure. Decoding is pure; the caller logs the error and
/// drops the event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The bytes were not valid JSON, or the JSON value was not an object.
    #[error("malformed push payload: {0}")]
    Malformed(String),
}

/// Raw wire form of a push message. Every field is optional; the transport
/// may redeliver the same payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushPayload {
    /// Notification title.
    #[serde(default)]
    pub title: Option<String>,
    /// Notification body text.
    #[serde(default)]
    pub body: Option<String>,
    /// Icon asset path or URL.
    #[serde(default)]
    pub icon: Option<String>,
    /// Conversation URL to open on activation.
    #[serde(default)]
    pub url: Option<String>,
    /// Conversation identifier; absent for system notifications.
    #[serde(default)]
    pub chat_id: Option<String>,
}

/// Decoded, normalized form of a push payload.
///
/// Empty strings are normalized to `None` here so the renderer's defaulting
/// yields non-empty title/body for every input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationRecord {
    /// Title, if the payload carried a non-empty one.
    pub title: Option<String>,
    /// Body text, if the payload carried a non-empty one.
    pub body: Option<String>,
    /// Icon override, if any.
    pub icon: Option<String>,
    /// Conversation URL, if any.
    pub url: Option<String>,
    /// Conversation identifier; `None` marks a system notification.
    pub chat_id: Option<String>,
}

/// Parses raw push bytes into a [`NotificationRecord`].
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] when `raw` is not valid JSON or the
/// top-level value is not an object. Missing fields are not errors.
pub fn decode(raw: &[u8]) -> Result<NotificationRecord, DecodeError> {
    let value: serde_json::Value =
        serde_json::from_slice(raw).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(DecodeError::Malformed(
            "top-level value is not an object".to_string(),
        ));
    }
    let payload: PushPayload =
        serde_json::from_value(value).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    Ok(NotificationRecord {
        title: non_empty(payload.title),
        body: non_empty(payload.body),
        icon: non_empty(payload.icon),
        url: non_empty(payload.url),
        chat_id: non_empty(payload.chat_id),
    })
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn malformed_inputs_are_rejected() {
        for raw in [
            &b""[..],
            &b"not json"[..],
            &b"[1,2]"[..],
            &b"\"just a string\""[..],
            &b"42"[..],
            &b"null"[..],
        ] {
            assert!(
                matches!(decode(raw), Err(DecodeError::Malformed(_))),
                "expected Malformed for {raw:?}"
            );
        }
    }

    #[test]
    fn minimal_payload_decodes_with_absent_fields() {
        let record = decode(br#"{"chatId":"c42"}"#).expect("decode");
        assert_eq!(
            record,
            NotificationRecord {
                chat_id: Some("c42".to_string()),
                ..NotificationRecord::default()
            }
        );
    }

    #[test]
    fn full_payload_decodes_every_field() {
        let record =
            decode(br#"{"title":"Alice","body":"Hi!","icon":"/a.png","url":"/chat/7","chatId":"7"}"#)
                .expect("decode");
        assert_eq!(
            record,
            NotificationRecord {
                title: Some("Alice".to_string()),
                body: Some("Hi!".to_string()),
                icon: Some("/a.png".to_string()),
                url: Some("/chat/7".to_string()),
                chat_id: Some("7".to_string()),
            }
        );
    }

    #[test]
    fn empty_strings_normalize_to_absent() {
        let record = decode(br#"{"title":"","body":"","url":""}"#).expect("decode");
        assert_eq!(record, NotificationRecord::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let record = decode(br#"{"title":"Alice","ttl":60,"priority":"high"}"#).expect("decode");
        assert_eq!(record.title, Some("Alice".to_string()));
    }
}
