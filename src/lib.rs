//! # toastvisor
//!
//! **Toastvisor** is a lifecycle manager for transient notifications
//! ("toasts"): callers say *show a success message* or *track this
//! operation*, and the library keeps the canonical registry of live toasts,
//! drives one cancellable auto-dismiss timer per toast, and projects every
//! state change through a pluggable presentation seam - without the caller
//! ever touching visual elements.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//!     │   caller    │   │   caller    │   │   Emitter   │
//!     │ success(..) │   │ track(op)   │   │ (over Bus)  │
//!     └──────┬──────┘   └──────┬──────┘   └──────┬──────┘
//!            ▼                 ▼                 ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  ToastManager (lifecycle manager)                             │
//! │  - Registry (canonical map: id → ToastRecord)                 │
//! │  - Timers (one cancellable auto-dismiss handle per id)        │
//! │  - intent listener (consumes *Requested events from the Bus)  │
//! └──────┬───────────────────────────────┬────────────────────────┘
//!        │ render/update/destroy/clear   │ publishes
//!        ▼                               ▼
//! ┌──────────────────────┐   ┌───────────────────────────────────┐
//! │  PresenterChannel    │   │  Bus (broadcast notifications:    │
//! │  (FIFO queue+worker) │   │  Added, Updated, Expired, ...)    │
//! └──────────┬───────────┘   └───────────────────────────────────┘
//!            ▼
//!    Present impl (DOM bridge, TUI pane, LogPresenter, ...)
//! ```
//!
//! ### Lifecycle of one toast
//! ```text
//! add(record)
//!   ├─► Registry.set(record)
//!   ├─► presenter.render(record)
//!   └─► duration > 0 ? arm timer : sticky
//!
//! update(record)            same id, new state
//!   ├─► cancel armed timer  (before anything else)
//!   ├─► Registry.set(record)
//!   ├─► presenter.update(record)
//!   └─► duration > 0 ? arm fresh timer : sticky
//!
//! timer fires ──► still the armed timer? record still live?
//!   ├─ yes ─► same steps as remove, publishes Expired
//!   └─ no  ─► no-op (superseded by update/remove/clear)
//!
//! remove(id)   idempotent          clear()
//!   ├─► cancel timer                 ├─► cancel every timer
//!   ├─► Registry.delete(id)          ├─► Registry.clear()
//!   └─► presenter.destroy(id)        └─► presenter.clear_all()
//! ```
//!
//! ## Features
//! | Area             | Description                                              | Key types                              |
//! |------------------|----------------------------------------------------------|----------------------------------------|
//! | **Emitters**     | Typed one-liners and the operation tracker.              | [`ToastManager`], [`TrackConfig`]      |
//! | **Intents**      | The four raw operations, directly callable or over the bus. | [`ToastManager`], [`Emitter`]       |
//! | **Presentation** | Pluggable rendering seam with queued, isolated delivery. | [`Present`]                            |
//! | **Events**       | Broadcast notifications of every lifecycle change.       | [`Event`], [`EventKind`], [`Bus`]      |
//! | **Identity**     | Injected fresh-id capability.                            | [`ToastId`], [`IdGen`], [`UuidGen`]    |
//! | **Errors**       | Typed teardown errors.                                   | [`RuntimeError`]                       |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogPresenter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use toastvisor::{Config, ToastKind, ToastManager, TrackConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let toasts = ToastManager::builder(Config::default()).build();
//!
//!     // Fire-and-forget, auto-dismissed after the default 3s.
//!     toasts.success("Profile saved").await;
//!
//!     // Sticky loading toast, resolved by hand.
//!     let id = toasts.loading("Connecting...").await;
//!     toasts
//!         .update_to(id, ToastKind::Success, "Connected", Duration::from_secs(2))
//!         .await;
//!
//!     // Or let the manager drive the loading → settled transition.
//!     let value = toasts
//!         .track(
//!             async { Ok::<_, std::io::Error>(42) },
//!             TrackConfig::default().with_success("Answer computed"),
//!         )
//!         .await
//!         .unwrap();
//!     assert_eq!(value, 42);
//!
//!     toasts.shutdown().await.unwrap();
//! }
//! ```

mod core;
mod error;
mod events;
mod present;
mod toasts;

// ---- Public re-exports ----

pub use core::{Config, ToastManager, ToastManagerBuilder};
pub use error::RuntimeError;
pub use events::{Bus, Emitter, Event, EventKind};
pub use present::Present;
pub use toasts::{IdGen, SerialGen, ToastId, ToastKind, ToastRecord, TrackConfig, UuidGen};

// Optional: expose a simple built-in logging presenter (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use present::LogPresenter;
