//! # Example: track
//!
//! Wraps fallible async operations with `ToastManager::track`: a sticky
//! loading toast appears while the operation runs, then settles into a
//! success or error toast - and the operation's own result is forwarded
//! unchanged to the caller.
//!
//! ## Flow
//! ```text
//! track(op, overrides)
//!   ├─► loading(pending message)         sticky
//!   ├─► op.await
//!   ├─ Ok(v)  ─► update_to(Success, success message)  ─► returns Ok(v)
//!   └─ Err(e) ─► update_to(Error, e.to_string())      ─► returns Err(e)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example track --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use toastvisor::{Config, LogPresenter, ToastManager, TrackConfig};

async fn fetch_report(fail: bool) -> Result<u32, String> {
    tokio::time::sleep(Duration::from_millis(300)).await;
    if fail {
        Err("upstream returned 503".to_string())
    } else {
        Ok(1284)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let toasts = ToastManager::builder(Config::default())
        .with_presenter(Arc::new(LogPresenter))
        .build();

    let rows = toasts
        .track(
            fetch_report(false),
            TrackConfig::default()
                .with_pending("Fetching report...")
                .with_success("Report ready")
                .with_duration(Duration::from_millis(600)),
        )
        .await;
    println!("first run: {rows:?}");

    let rows = toasts
        .track(fetch_report(true), TrackConfig::default())
        .await;
    println!("second run: {rows:?}");

    // Let the settled toasts dismiss themselves before tearing down.
    tokio::time::sleep(Duration::from_secs(4)).await;
    toasts.shutdown().await.expect("presenter drains");
}
