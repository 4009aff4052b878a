//! Toast events: types, broadcast bus, and the intent emitter.
//!
//! This module groups the event **data model**, the **bus** used to
//! publish/subscribe to toast events, and the **emitter** that lets
//! decoupled callers fire intents without holding a manager handle.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//! - [`Emitter`] bus-backed publisher of the four intents
//!
//! ## Quick reference
//! - **Publishers**: [`Emitter`] (requests), `ToastManager` (notifications
//!   and diagnostics).
//! - **Consumers**: the manager's intent listener (requests only), plus any
//!   observer that subscribes for notifications.

mod bus;
mod emitter;
mod event;

pub use bus::Bus;
pub use emitter::Emitter;
pub use event::{Event, EventKind};
