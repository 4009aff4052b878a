//! # Toast events: intents in, notifications out.
//!
//! [`EventKind`] classifies events into three groups:
//! - **Requests**: the four intents (`add` / `update` / `remove` / `clear`)
//!   published by decoupled callers and consumed by the manager's listener
//! - **Notifications**: confirmations published by the manager after it
//!   mutated the registry (added, updated, removed, expired, cleared)
//! - **Diagnostics**: runtime conditions (lagged listener, panicking
//!   presenter, shutdown)
//!
//! The [`Event`] struct carries the metadata for its kind: toast id, full
//! record, reason string, wall-clock timestamp.
//!
//! ## Ordering
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! observed out of order across receivers.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::toasts::{ToastId, ToastRecord};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of toast events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Intent requests ===
    /// Request to add a new toast.
    ///
    /// Sets:
    /// - `record`: the toast to add (carries the fresh id)
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    AddRequested,

    /// Request to update an existing toast in place.
    ///
    /// Sets:
    /// - `record`: replacement state (same id as the original)
    /// - `at`, `seq`
    UpdateRequested,

    /// Request to remove one toast.
    ///
    /// Sets:
    /// - `id`: target toast
    /// - `at`, `seq`
    RemoveRequested,

    /// Request to discard every live toast at once.
    ///
    /// Sets:
    /// - `at`, `seq`
    ClearRequested,

    // === Lifecycle notifications ===
    /// A toast was added to the registry and handed to the presenter.
    ///
    /// Sets:
    /// - `record`: the stored state
    /// - `at`, `seq`
    Added,

    /// A live toast was overwritten (timer rescheduled if applicable).
    ///
    /// Sets:
    /// - `record`: the new stored state
    /// - `at`, `seq`
    Updated,

    /// A toast was removed by an explicit intent.
    ///
    /// Sets:
    /// - `id`: the removed toast
    /// - `at`, `seq`
    Removed,

    /// A toast was removed because its auto-dismiss timer fired.
    ///
    /// Sets:
    /// - `id`: the expired toast
    /// - `at`, `seq`
    Expired,

    /// All toasts were discarded at once.
    ///
    /// Sets:
    /// - `at`, `seq`
    Cleared,

    // === Runtime diagnostics ===
    /// The intent listener lagged behind the bus and skipped events.
    ///
    /// Sets:
    /// - `reason`: how many events were skipped
    /// - `at`, `seq`
    ListenerLagged,

    /// The presenter panicked while applying a command.
    ///
    /// Sets:
    /// - `reason`: panic info/message
    /// - `at`, `seq`
    PresenterPanicked,

    /// Manager teardown started; timers and the listener are cancelled.
    ///
    /// Sets:
    /// - `at`, `seq`
    ShutdownRequested,

    /// The presenter queue did not drain within the shutdown grace window.
    ///
    /// Sets:
    /// - `at`, `seq`
    GraceExceeded,
}

/// Toast event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Debug, Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Target toast id, if applicable.
    pub id: Option<ToastId>,
    /// Full toast record, for add/update events.
    pub record: Option<ToastRecord>,
    /// Human-readable reason (lag counts, panic details, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            id: None,
            record: None,
            reason: None,
        }
    }

    /// Attaches a toast id.
    #[inline]
    pub fn with_id(mut self, id: ToastId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attaches a full toast record (also sets the id).
    #[inline]
    pub fn with_record(mut self, record: ToastRecord) -> Self {
        self.id = Some(record.id.clone());
        self.record = Some(record);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
