//! Push-notification delivery and routing runtime for a multi-conversation
//! messaging client.
//!
//! The runtime reacts to two host events: a received push message (decode,
//! dedup, render, present) and a notification activation (locate the surface
//! that should receive focus, then navigate it to the referenced
//! conversation). Host services are injected through the `push_host` trait
//! objects; all errors are absorbed and logged at the entry-point boundary.

pub mod config;
pub mod decode;
pub mod dedup;
pub mod dispatch;
pub mod locate;
pub mod render;
pub mod runtime;

pub use config::RuntimeConfig;
pub use decode::{decode, DecodeError, NotificationRecord, PushPayload};
pub use dedup::DedupGuard;
pub use dispatch::{dispatch, DispatchError, NavigationTarget};
pub use locate::{locate, LocatorError};
pub use render::render;
pub use runtime::PushRuntime;
