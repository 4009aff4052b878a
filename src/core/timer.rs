//! # Cancellable auto-dismiss timer handles.
//!
//! One live toast owns at most one armed timer. [`Timers`] stores the
//! per-id [`TimerHandle`]s; the manager arms, replaces, and cancels them
//! under its state lock, so "cancel the old timer, arm a new one" is atomic
//! with respect to other intents for the same id.
//!
//! ## Staleness
//! Every armed timer carries a sequence number from a global monotonic
//! counter. A fired timer only acts if its sequence still matches the handle
//! armed for that id: a timer that fired concurrently with the `update` that
//! replaced it finds a newer sequence and becomes a no-op. This is the belt;
//! token cancellation of the sleeping task is the suspenders.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::toasts::ToastId;

/// Global sequence counter for timer staleness checks.
static TIMER_SEQ: AtomicU64 = AtomicU64::new(0);

/// Returns the next timer sequence number.
pub(crate) fn next_seq() -> u64 {
    TIMER_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Handle to one armed auto-dismiss timer.
#[derive(Debug)]
pub(crate) struct TimerHandle {
    /// Sequence this timer was armed with; stale fires are rejected by it.
    pub seq: u64,
    /// Cancels the sleeping task.
    pub cancel: CancellationToken,
    /// Join handle of the sleeping task (detached on drop).
    #[allow(dead_code)]
    pub join: JoinHandle<()>,
}

impl TimerHandle {
    /// Cancels the sleeping task and drops the handle.
    pub fn cancel(self) {
        self.cancel.cancel();
    }
}

/// Armed timers, keyed by toast id.
#[derive(Debug, Default)]
pub(crate) struct Timers {
    armed: HashMap<ToastId, TimerHandle>,
}

impl Timers {
    /// Arms `handle` for `id`, returning any handle it replaced.
    ///
    /// The caller must cancel the returned handle; `Timers` never leaves two
    /// handles armed for one id.
    #[must_use]
    pub fn insert(&mut self, id: ToastId, handle: TimerHandle) -> Option<TimerHandle> {
        self.armed.insert(id, handle)
    }

    /// Disarms and returns the handle for `id`, if any.
    pub fn take(&mut self, id: &ToastId) -> Option<TimerHandle> {
        self.armed.remove(id)
    }

    /// Sequence of the currently armed timer for `id`, if any.
    pub fn seq_of(&self, id: &ToastId) -> Option<u64> {
        self.armed.get(id).map(|h| h.seq)
    }

    /// Cancels every armed timer.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.armed.drain() {
            handle.cancel();
        }
    }

    /// Number of armed timers.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.armed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> TimerHandle {
        TimerHandle {
            seq: next_seq(),
            cancel: CancellationToken::new(),
            join: tokio::spawn(async {}),
        }
    }

    #[tokio::test]
    async fn insert_replaces_and_returns_previous_handle() {
        let mut timers = Timers::default();
        let id: ToastId = "a".into();

        let first = handle();
        let first_seq = first.seq;
        assert!(timers.insert(id.clone(), first).is_none());

        let second = handle();
        let second_seq = second.seq;
        let replaced = timers.insert(id.clone(), second).expect("old handle back");
        assert_eq!(replaced.seq, first_seq);
        replaced.cancel();

        assert_eq!(timers.seq_of(&id), Some(second_seq));
        assert_eq!(timers.len(), 1, "one armed timer per id");
    }

    #[tokio::test]
    async fn take_disarms() {
        let mut timers = Timers::default();
        let id: ToastId = "a".into();
        let _ = timers.insert(id.clone(), handle());

        let taken = timers.take(&id).expect("was armed");
        taken.cancel();
        assert_eq!(timers.seq_of(&id), None);
        assert!(timers.take(&id).is_none());
    }

    #[tokio::test]
    async fn cancel_all_fires_every_token() {
        let mut timers = Timers::default();
        let a = handle();
        let b = handle();
        let (tok_a, tok_b) = (a.cancel.clone(), b.cancel.clone());
        let _ = timers.insert("a".into(), a);
        let _ = timers.insert("b".into(), b);

        timers.cancel_all();
        assert!(tok_a.is_cancelled());
        assert!(tok_b.is_cancelled());
        assert_eq!(timers.len(), 0);
    }

    #[test]
    fn sequences_are_monotonic() {
        let a = next_seq();
        let b = next_seq();
        assert!(b > a);
    }
}
