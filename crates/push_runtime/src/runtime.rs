//! Entry-point bundle wiring the pipeline stages to injected host services.

use std::{cell::RefCell, rc::Rc};

use futures::future::LocalBoxFuture;
use push_host::{NotificationData, NotificationPresenter, SurfaceService};
use tracing::{debug, warn};

use crate::{
    config::RuntimeConfig,
    decode::decode,
    dedup::DedupGuard,
    dispatch::{dispatch, NavigationTarget},
    locate::{locate, LocatorError},
    render::render,
};

/// Push delivery/routing runtime for one background execution context.
///
/// Reacts to exactly two host events. Handlers run one at a time on the
/// host's event loop and return a pending-work future the host awaits before
/// considering the event handled; the future always resolves `()` because
/// every failure is absorbed and logged here. The dedup guard is the only
/// mutable state and is discarded with the process.
pub struct PushRuntime {
    surfaces: Rc<dyn SurfaceService>,
    presenter: Rc<dyn NotificationPresenter>,
    guard: RefCell<DedupGuard>,
    config: RuntimeConfig,
}

impl PushRuntime {
    /// Composes a runtime over the injected host services.
    pub fn new(
        surfaces: Rc<dyn SurfaceService>,
        presenter: Rc<dyn NotificationPresenter>,
        config: RuntimeConfig,
    ) -> Self {
        let guard = RefCell::new(DedupGuard::new(config.dedup_window_ms, config.seen_capacity));
        Self {
            surfaces,
            presenter,
            guard,
            config,
        }
    }

    /// Handles one received push message: decode, dedup, render, present.
    ///
    /// Undecodable payloads and suppressed duplicates end the event with a
    /// log line and no visible notification.
    pub fn on_push_received<'a>(&'a self, raw: &'a [u8], now_ms: u64) -> LocalBoxFuture<'a, ()> {
        Box::pin(async move {
            let record = match decode(raw) {
                Ok(record) => record,
                Err(error) => {
                    warn!(error = %error, "dropping undecodable push event");
                    return;
                }
            };
            if self
                .guard
                .borrow_mut()
                .should_suppress(record.chat_id.as_deref(), now_ms)
            {
                debug!(
                    chat_id = record.chat_id.as_deref().unwrap_or(""),
                    "suppressing redelivered conversation notification"
                );
                return;
            }
            let descriptor = render(&record, &self.config);
            if let Err(error) = self.presenter.present(&descriptor).await {
                warn!(error = %error, "presenting notification failed");
            }
        })
    }

    /// Handles one notification activation: locate a surface, then focus and
    /// navigate it (or open a new one) at the URL carried by `data`.
    ///
    /// Enumeration failure falls back to opening a new surface; dispatch
    /// failure is logged and the event ends. A later activation retries
    /// naturally, so nothing here is retried.
    pub fn on_notification_activated(
        &self,
        data: NotificationData,
        now_ms: u64,
    ) -> LocalBoxFuture<'_, ()> {
        Box::pin(async move {
            debug!(
                url = %data.url,
                chat_id = data.chat_id.as_deref().unwrap_or(""),
                now_ms,
                "notification activated"
            );
            let handle = match self.surfaces.enumerate().await {
                Ok(surfaces) => locate(&surfaces).map(|surface| surface.handle),
                Err(reason) => {
                    let error = LocatorError::EnumerationFailed(reason);
                    warn!(error = %error, "falling back to a new surface");
                    None
                }
            };
            let target = NavigationTarget {
                handle,
                url: data.url,
            };
            if let Err(error) = dispatch(self.surfaces.as_ref(), &target).await {
                warn!(error = %error, url = %target.url, "notification navigation failed");
            }
        })
    }
}
