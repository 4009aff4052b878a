//! # Bus-backed intent emitter.
//!
//! [`Emitter`] publishes the four raw intents as `*Requested` events on a
//! [`Bus`], for callers that want to stay decoupled from the manager (other
//! subsystems, other crates, code that should not hold a manager handle).
//! The manager's intent listener picks the requests up and applies them.
//!
//! Calling the [`ToastManager`](crate::ToastManager) directly is the
//! preferred interface; the emitter is the adapter for event-bus wiring.
//!
//! ```text
//! Emitter::add(record) ──► Bus ──► manager listener ──► ToastManager::add
//! ```
//!
//! Delivery is fire-and-forget with the bus's semantics: if the manager's
//! listener has been shut down, requests are dropped.

use crate::events::{Bus, Event, EventKind};
use crate::toasts::{ToastId, ToastRecord};

/// Publishes toast intents on a [`Bus`].
#[derive(Clone, Debug)]
pub struct Emitter {
    bus: Bus,
}

impl Emitter {
    /// Creates an emitter over the given bus.
    ///
    /// Use [`ToastManager::bus`](crate::ToastManager::bus) to emit toward an
    /// existing manager.
    pub fn new(bus: Bus) -> Self {
        Self { bus }
    }

    /// Requests that `record` be added.
    ///
    /// `record.id` must be fresh; reusing a live id is caller misuse (the
    /// registry would treat it as an overwrite).
    pub fn add(&self, record: ToastRecord) {
        self.bus
            .publish(Event::new(EventKind::AddRequested).with_record(record));
    }

    /// Requests that the toast with `record.id` be replaced by `record`.
    pub fn update(&self, record: ToastRecord) {
        self.bus
            .publish(Event::new(EventKind::UpdateRequested).with_record(record));
    }

    /// Requests removal of one toast. Unknown ids are ignored.
    pub fn remove(&self, id: ToastId) {
        self.bus
            .publish(Event::new(EventKind::RemoveRequested).with_id(id));
    }

    /// Requests that every live toast be discarded.
    pub fn clear(&self) {
        self.bus.publish(Event::new(EventKind::ClearRequested));
    }
}
