//! # Toast identifiers and the fresh-id capability.
//!
//! Every toast is addressed by an opaque [`ToastId`], assigned once at
//! creation and reused by later `update`/`remove` intents. The manager does
//! not invent ids itself: it asks an injected [`IdGen`] for a fresh one, so
//! embedders can swap the generation scheme without touching the lifecycle
//! code.
//!
//! Two generators ship with the crate:
//! - [`UuidGen`] random v4 UUIDs, the default;
//! - [`SerialGen`] prefixed counter ids, deterministic (useful in tests).

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Opaque identifier of a single toast.
///
/// Cheap to clone (`Arc`-backed) and usable as a map key. The string form is
/// whatever the generating [`IdGen`] produced; the manager only ever compares
/// ids for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(Arc<str>);

impl ToastId {
    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for ToastId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

/// Source of fresh toast ids.
///
/// ### Contract
/// - Every call returns an id not returned before by this instance.
/// - Generators must be safe to call from multiple tasks concurrently.
pub trait IdGen: Send + Sync + 'static {
    /// Returns a fresh, never-seen id.
    fn fresh(&self) -> ToastId;
}

/// Random v4 UUID generator (default).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGen;

impl IdGen for UuidGen {
    fn fresh(&self) -> ToastId {
        ToastId::from(Uuid::new_v4().to_string())
    }
}

/// Prefixed counter generator: `prefix-1`, `prefix-2`, ...
///
/// Deterministic and readable; handy for tests and log-friendly demos.
#[derive(Debug)]
pub struct SerialGen {
    prefix: Cow<'static, str>,
    next: AtomicU64,
}

impl SerialGen {
    /// Creates a generator with the given id prefix.
    pub fn new(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SerialGen {
    fn default() -> Self {
        Self::new("toast")
    }
}

impl IdGen for SerialGen {
    fn fresh(&self) -> ToastId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ToastId::from(format!("{}-{n}", self.prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_ids_are_sequential_and_distinct() {
        let gen = SerialGen::new("t");
        assert_eq!(gen.fresh().as_str(), "t-1");
        assert_eq!(gen.fresh().as_str(), "t-2");
        assert_eq!(gen.fresh().as_str(), "t-3");
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let gen = UuidGen;
        let a = gen.fresh();
        let b = gen.fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn ids_compare_by_content() {
        let a = ToastId::from("same");
        let b = ToastId::from("same".to_string());
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "same");
    }
}
