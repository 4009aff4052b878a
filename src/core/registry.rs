//! # Toast registry - the canonical map of live toasts.
//!
//! [`Registry`] owns the authoritative answer to "which toasts exist right
//! now, and what are their contents". It is a leaf component: a plain map
//! with total operations, no timers, no presentation, no locking. The
//! manager is its only writer and wraps it in the state lock, so intent
//! ordering is decided one level up.
//!
//! ## Rules
//! - At most one record per id (an insert under a live id overwrites it:
//!   last write wins).
//! - All operations are total; there are no error conditions.
//! - Insertion order carries no meaning here; visual stacking is a
//!   presenter concern.

use std::collections::HashMap;

use crate::toasts::{ToastId, ToastRecord};

/// Map of live toast records, keyed by id.
#[derive(Debug, Default)]
pub struct Registry {
    records: HashMap<ToastId, ToastRecord>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `record` under its id, overwriting any previous record.
    pub fn set(&mut self, record: ToastRecord) {
        self.records.insert(record.id.clone(), record);
    }

    /// Returns the live record for `id`, if any.
    pub fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.records.get(id)
    }

    /// True if a record is live under `id`.
    pub fn has(&self, id: &ToastId) -> bool {
        self.records.contains_key(id)
    }

    /// Deletes the record under `id`; returns whether one existed.
    pub fn delete(&mut self, id: &ToastId) -> bool {
        self.records.remove(id).is_some()
    }

    /// Discards every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
