//! # Simple logging presenter for debugging and demos.
//!
//! [`LogPresenter`] prints every presentation command to stdout in a
//! human-readable format.
//!
//! ## Output format
//! ```text
//! [success] id=toast-1 content="Saved" dismiss_after=Some(3s)
//! [loading] id=toast-2 content="Uploading..." sticky
//! [update -> error] id=toast-2 content="Upload failed"
//! [dismiss] id=toast-1
//! [clear-all]
//! ```

use async_trait::async_trait;

use crate::present::present::Present;
use crate::toasts::{ToastId, ToastRecord};

/// Stdout presenter.
///
/// Enabled via the `logging` feature. Prints human-readable projections of
/// every command for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Present`] for a
/// real rendering surface.
pub struct LogPresenter;

#[async_trait]
impl Present for LogPresenter {
    async fn render(&self, record: &ToastRecord) {
        match record.auto_dismiss() {
            Some(d) => println!(
                "[{}] id={} content={:?} dismiss_after={:?}",
                record.kind.as_label(),
                record.id,
                record.content,
                d
            ),
            None => println!(
                "[{}] id={} content={:?} sticky",
                record.kind.as_label(),
                record.id,
                record.content
            ),
        }
    }

    async fn update(&self, record: &ToastRecord) {
        println!(
            "[update -> {}] id={} content={:?}",
            record.kind.as_label(),
            record.id,
            record.content
        );
    }

    async fn destroy(&self, id: &ToastId) {
        println!("[dismiss] id={id}");
    }

    async fn clear_all(&self) {
        println!("[clear-all]");
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
