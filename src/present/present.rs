//! # Core presentation trait.
//!
//! `Present` is the seam between the lifecycle manager and whatever surface
//! actually shows toasts: a DOM bridge, a terminal pane, a native window, or
//! a test double. The manager never touches visual elements itself; it
//! projects every registry mutation through this trait.
//!
//! ## Contract
//! - Implementations may be slow or not-yet-ready (awaiting a surface to
//!   come up): calls are delivered through a FIFO queue by a dedicated
//!   worker, so they are deferred, never dropped, and never block the
//!   manager.
//! - The manager guarantees per-id call ordering: a `render` for an id is
//!   observed before any `update`/`destroy` for it.
//! - `update` must reconcile kind-dependent structure in place - a
//!   `loading` toast carries no dismiss affordance
//!   ([`ToastKind::dismissible`](crate::ToastKind::dismissible)), so a kind
//!   switch adds or removes that affordance rather than re-rendering the
//!   whole element.
//! - `destroy` may play an exit transition before detaching; the registry
//!   was already mutated when the call arrives, so liveness queries are
//!   correct during the fade-out.
//!
//! ## Example (skeleton)
//! ```rust
//! use async_trait::async_trait;
//! use toastvisor::{Present, ToastId, ToastRecord};
//!
//! struct Stdout;
//!
//! #[async_trait]
//! impl Present for Stdout {
//!     async fn render(&self, record: &ToastRecord) {
//!         println!("+ {}", record.content);
//!     }
//!     async fn update(&self, record: &ToastRecord) {
//!         println!("~ {}", record.content);
//!     }
//!     async fn destroy(&self, id: &ToastId) {
//!         println!("- {id}");
//!     }
//!     async fn clear_all(&self) {
//!         println!("x all");
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::toasts::{ToastId, ToastRecord};

/// Contract for the presentation collaborator.
///
/// Called from a dedicated worker task. Implementations should avoid
/// blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Present: Send + Sync + 'static {
    /// Creates the visual element for a newly added toast.
    async fn render(&self, record: &ToastRecord);

    /// Updates the existing element for `record.id` in place.
    ///
    /// Called for every `update` intent - including the degenerate case
    /// where no element exists because the id was never added; the
    /// implementation should treat that as a no-op.
    async fn update(&self, record: &ToastRecord);

    /// Removes the element for `id` (exit transition, then detach).
    async fn destroy(&self, id: &ToastId);

    /// Discards every element immediately, without exit transitions.
    async fn clear_all(&self);

    /// Human-readable name (for logs/diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Presenter that discards every command.
///
/// Builder default when no presenter is attached; keeps the lifecycle
/// observable through bus events alone.
#[derive(Debug, Default)]
pub(crate) struct NoopPresenter;

#[async_trait]
impl Present for NoopPresenter {
    async fn render(&self, _record: &ToastRecord) {}
    async fn update(&self, _record: &ToastRecord) {}
    async fn destroy(&self, _id: &ToastId) {}
    async fn clear_all(&self) {}

    fn name(&self) -> &'static str {
        "noop"
    }
}
