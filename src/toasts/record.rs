//! # Toast data model: kinds and records.
//!
//! A [`ToastRecord`] is the canonical state of one notification: identity,
//! kind, display content, auto-dismiss duration, and creation time. The
//! registry owns the live records; everything else (elements, timers) is
//! derived from them.
//!
//! ## Duration sentinel
//! `duration == Duration::ZERO` means "sticky": the toast is never
//! auto-dismissed and persists until an explicit `remove`, a `clear`, or an
//! update that gives it a positive duration. [`ToastRecord::auto_dismiss`]
//! maps the sentinel to an `Option` so callers never compare against zero
//! directly.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use crate::toasts::id::ToastId;

/// Classification of a toast.
///
/// Exactly one kind at any time; an `update` intent may switch a toast to
/// any other kind (`loading` → `success` is the common transition, but none
/// are forbidden).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation completed successfully.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention but did not fail.
    Warning,
    /// Neutral informational message.
    Info,
    /// Operation in progress; sticky by convention (`duration = 0`).
    Loading,
}

impl ToastKind {
    /// Returns a short stable label (snake_case) for logs and presenters.
    pub fn as_label(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Warning => "warning",
            ToastKind::Info => "info",
            ToastKind::Loading => "loading",
        }
    }

    /// Whether a toast of this kind carries a manual dismiss affordance.
    ///
    /// `Loading` toasts do not: they represent an operation in flight and are
    /// dismissed by the code that started it (or by an update to another
    /// kind). Presenters reconcile this on kind changes instead of
    /// re-rendering the whole element.
    pub fn dismissible(&self) -> bool {
        !matches!(self, ToastKind::Loading)
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Canonical state of one toast.
///
/// ### Invariants (enforced by the manager)
/// - At most one live record per [`ToastId`] at any time.
/// - `id` is immutable for the record's lifetime; an update reuses the id,
///   a new id always means a new record.
/// - At most one armed auto-dismiss timer per live record.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    /// Identity, assigned at creation.
    pub id: ToastId,
    /// Current kind.
    pub kind: ToastKind,
    /// Display text.
    pub content: Arc<str>,
    /// Time until auto-dismiss; `Duration::ZERO` = sticky.
    pub duration: Duration,
    /// Creation time of this record state.
    pub timestamp: SystemTime,
}

impl ToastRecord {
    /// Creates a record stamped with the current wall-clock time.
    pub fn new(
        id: ToastId,
        kind: ToastKind,
        content: impl Into<Arc<str>>,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            kind,
            content: content.into(),
            duration,
            timestamp: SystemTime::now(),
        }
    }

    /// Returns the auto-dismiss delay, or `None` for sticky records.
    #[inline]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        if self.duration == Duration::ZERO {
            None
        } else {
            Some(self.duration)
        }
    }
}
