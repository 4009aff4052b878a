//! # Broadcast bus for toast events.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that carries
//! both directions of traffic: intent requests from decoupled callers toward
//! the manager's listener, and lifecycle notifications from the manager
//! toward anyone observing.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                       Receivers (any number):
//!   Emitter ──┐
//!   Emitter ──┼──────► Bus ───────┬──────► ToastManager intent listener
//!   Manager ──┘  (broadcast chan) └──────► observers (logs, tests, UIs)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls
//!   `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for all
//!   receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip
//!   the `n` oldest items.
//! - **No persistence**: events are lost if there are no active receivers at
//!   send time.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for toast events.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally holds an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// Capacity is shared across all receivers (not per-receiver); the
    /// minimum is 1 (clamped). Receivers that fall behind by more than the
    /// capacity observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// Takes ownership of the event; the broadcast channel clones it per
    /// receiver. With no receivers the event is dropped silently.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that observes subsequent events.
    ///
    /// Each call creates an independent receiver; a receiver only gets
    /// events sent after it subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}
