//! # Example: demo
//!
//! End-to-end walkthrough of the toast lifecycle against the built-in
//! logging presenter.
//!
//! Demonstrates how to:
//! - Build a `ToastManager` with a presenter.
//! - Fire typed emitters (`success`, `warning`, `info`) that auto-dismiss.
//! - Open a sticky `loading` toast and resolve it by hand with `update_to`.
//! - Discard everything with `clear`, then tear the manager down.
//!
//! ## Flow
//! ```text
//! main()
//!   ├─► ToastManager::builder(cfg).with_presenter(LogPresenter).build()
//!   ├─► success/warning/info   … auto-dismissed after cfg.default_duration
//!   ├─► loading("Syncing...")  … sticky until update_to(Success)
//!   ├─► clear()
//!   └─► shutdown()
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example demo --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use toastvisor::{Config, LogPresenter, ToastKind, ToastManager};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let mut cfg = Config::default();
    cfg.default_duration = Duration::from_millis(800);

    let toasts = ToastManager::builder(cfg)
        .with_presenter(Arc::new(LogPresenter))
        .build();

    toasts.success("Profile saved").await;
    toasts.warning("Disk almost full").await;
    toasts.info("3 new messages").await;

    // Sticky until we resolve it below.
    let sync = toasts.loading("Syncing workspace...").await;

    tokio::time::sleep(Duration::from_millis(500)).await;
    toasts
        .update_to(
            sync,
            ToastKind::Success,
            "Workspace synced",
            Duration::from_millis(800),
        )
        .await;

    // Let the auto-dismiss timers run their course.
    tokio::time::sleep(Duration::from_millis(1200)).await;

    toasts.clear().await;
    match toasts.shutdown().await {
        Ok(()) => println!("manager stopped gracefully"),
        Err(e) => println!("manager stopped with error: {e}"),
    }
}
