//! Typed host-domain contracts for the push-notification delivery subsystem.
//!
//! This crate is the API-first boundary between the push runtime and its host
//! environment. It exposes the surface (window/tab) model and service trait,
//! the rendered notification descriptor model and presenter trait, and time
//! helpers, while concrete host adapters live with the embedding application.
//! `Noop*` adapters cover unsupported targets; `Memory*` adapters back the
//! runtime's tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod notifications;
pub mod surfaces;
pub mod time;

pub use notifications::{
    MemoryNotificationPresenter, NoopNotificationPresenter, NotificationAction, NotificationData,
    NotificationDescriptor, NotificationFuture, NotificationPresenter,
};
pub use surfaces::{
    MemorySurfaceService, NoopSurfaceService, SurfaceCall, SurfaceFuture, SurfaceHandle,
    SurfaceService, SurfaceSnapshot,
};
pub use time::unix_time_ms_now;
