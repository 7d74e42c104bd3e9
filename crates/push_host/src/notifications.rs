//! Notification descriptor model, presenter contracts, and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`NotificationPresenter`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One action button attached to a rendered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationAction {
    /// Stable action identifier reported back on activation.
    pub id: String,
    /// User-visible action label.
    pub label: String,
}

/// Opaque navigation data carried by a descriptor.
///
/// Activation may occur arbitrarily long after rendering, including after a
/// process restart, so this data is fully self-contained and never references
/// in-memory state. Wire names are camelCase for host-side JSON storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationData {
    /// URL the activating surface should navigate to.
    pub url: String,
    /// Conversation the notification refers to, absent for system notices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

/// Platform-facing rendered representation of one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDescriptor {
    /// Notification title, non-empty.
    pub title: String,
    /// Notification body text, non-empty.
    pub body: String,
    /// Icon asset path or URL.
    pub icon: String,
    /// Badge asset path or URL.
    pub badge: String,
    /// Attached action buttons.
    pub actions: Vec<NotificationAction>,
    /// Vibration pattern in milliseconds; ignored by hosts without support.
    pub vibration_ms: Vec<u32>,
    /// Self-contained navigation data read back on activation.
    pub data: NotificationData,
}

/// Host service that surfaces a rendered notification to the user.
pub trait NotificationPresenter {
    /// Presents `descriptor` through the host notification mechanism.
    fn present<'a>(
        &'a self,
        descriptor: &'a NotificationDescriptor,
    ) -> NotificationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op presenter for unsupported targets.
pub struct NoopNotificationPresenter;

impl NotificationPresenter for NoopNotificationPresenter {
    fn present<'a>(
        &'a self,
        _descriptor: &'a NotificationDescriptor,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Default)]
struct MemoryPresenterState {
    presented: Vec<NotificationDescriptor>,
    fail: bool,
}

#[derive(Debug, Clone, Default)]
/// In-memory presenter that records every presented descriptor, used as a
/// fake in runtime tests. Can be armed to fail presentation.
pub struct MemoryNotificationPresenter {
    inner: Rc<RefCell<MemoryPresenterState>>,
}

impl MemoryNotificationPresenter {
    /// Returns the descriptors presented so far, in order.
    pub fn presented(&self) -> Vec<NotificationDescriptor> {
        self.inner.borrow().presented.clone()
    }

    /// Arms or disarms presentation failure.
    pub fn fail(&self, fail: bool) {
        self.inner.borrow_mut().fail = fail;
    }
}

impl NotificationPresenter for MemoryNotificationPresenter {
    fn present<'a>(
        &'a self,
        descriptor: &'a NotificationDescriptor,
    ) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            if state.fail {
                return Err("notification permission denied".to_string());
            }
            state.presented.push(descriptor.clone());
            Ok(())
        })
    }
}
