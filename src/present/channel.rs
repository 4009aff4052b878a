//! # PresenterChannel: ordered, isolated delivery to the presenter.
//!
//! The manager talks to its [`Present`] implementation through one unbounded
//! FIFO queue drained by a dedicated worker task.
//!
//! ## What it guarantees
//! - Enqueueing is synchronous and never blocks the manager (commands are
//!   queued while the manager holds its state lock).
//! - Global FIFO order: commands are applied in the order the manager
//!   issued them, which preserves per-id ordering end to end.
//! - Commands are deferred, never dropped: a presenter that is slow or whose
//!   surface is not ready yet simply leaves commands queued until it catches
//!   up.
//! - Panics inside the presenter are caught, reported on the bus, and do not
//!   kill the worker.
//!
//! ## Diagram
//! ```text
//! manager (under state lock)          worker task
//!   render/update/destroy ──► [FIFO queue] ──► presenter.render(...).await
//!                                        └──► catch_unwind → PresenterPanicked
//! ```

use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::events::{Bus, Event, EventKind};
use crate::present::present::Present;
use crate::toasts::{ToastId, ToastRecord};

/// One queued presentation command.
#[derive(Debug)]
enum Command {
    Render(ToastRecord),
    Update(ToastRecord),
    Destroy(ToastId),
    ClearAll,
    /// Sentinel: drain everything queued before it, then stop the worker.
    Close,
}

/// Sending half of the presenter queue.
#[derive(Clone, Debug)]
pub(crate) struct PresenterChannel {
    tx: mpsc::UnboundedSender<Command>,
}

impl PresenterChannel {
    /// Spawns the worker for `presenter` and returns the channel plus the
    /// worker's join handle.
    ///
    /// Must be called within a Tokio runtime.
    pub fn spawn(presenter: Arc<dyn Present>, bus: Bus) -> (Self, JoinHandle<()>) {
        let (tx, mut rx) = mpsc::unbounded_channel::<Command>();

        let worker = tokio::spawn(async move {
            while let Some(cmd) = rx.recv().await {
                if matches!(cmd, Command::Close) {
                    break;
                }
                let fut = apply(presenter.as_ref(), cmd);
                if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                    eprintln!(
                        "[toastvisor] presenter '{}' panicked: {:?}",
                        presenter.name(),
                        panic_err
                    );
                    bus.publish(
                        Event::new(EventKind::PresenterPanicked)
                            .with_reason(format!("presenter={}", presenter.name())),
                    );
                }
            }
        });

        (Self { tx }, worker)
    }

    /// Queues a render for a newly added toast.
    pub fn render(&self, record: ToastRecord) {
        let _ = self.tx.send(Command::Render(record));
    }

    /// Queues an in-place element update.
    pub fn update(&self, record: ToastRecord) {
        let _ = self.tx.send(Command::Update(record));
    }

    /// Queues removal of one element.
    pub fn destroy(&self, id: ToastId) {
        let _ = self.tx.send(Command::Destroy(id));
    }

    /// Queues immediate removal of every element.
    pub fn clear_all(&self) {
        let _ = self.tx.send(Command::ClearAll);
    }

    /// Queues the close sentinel; the worker drains prior commands and exits.
    pub fn close(&self) {
        let _ = self.tx.send(Command::Close);
    }
}

/// Applies one command to the presenter.
async fn apply(presenter: &dyn Present, cmd: Command) {
    match cmd {
        Command::Render(record) => presenter.render(&record).await,
        Command::Update(record) => presenter.update(&record).await,
        Command::Destroy(id) => presenter.destroy(&id).await,
        Command::ClearAll => presenter.clear_all().await,
        Command::Close => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::ToastKind;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct Recording {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Present for Recording {
        async fn render(&self, record: &ToastRecord) {
            self.calls.lock().unwrap().push(format!("render {}", record.id));
        }
        async fn update(&self, record: &ToastRecord) {
            self.calls.lock().unwrap().push(format!("update {}", record.id));
        }
        async fn destroy(&self, id: &ToastId) {
            self.calls.lock().unwrap().push(format!("destroy {id}"));
        }
        async fn clear_all(&self) {
            self.calls.lock().unwrap().push("clear_all".into());
        }
        fn name(&self) -> &'static str {
            "recording"
        }
    }

    struct Panicky;

    #[async_trait]
    impl Present for Panicky {
        async fn render(&self, _record: &ToastRecord) {
            panic!("surface gone");
        }
        async fn update(&self, _record: &ToastRecord) {}
        async fn destroy(&self, _id: &ToastId) {}
        async fn clear_all(&self) {}
        fn name(&self) -> &'static str {
            "panicky"
        }
    }

    fn record(id: &str) -> ToastRecord {
        ToastRecord::new(id.into(), ToastKind::Info, "x", Duration::ZERO)
    }

    #[tokio::test]
    async fn commands_are_applied_in_fifo_order() {
        let presenter = Arc::new(Recording::default());
        let bus = Bus::new(8);
        let (chan, worker) = PresenterChannel::spawn(presenter.clone(), bus);

        chan.render(record("a"));
        chan.update(record("a"));
        chan.destroy("a".into());
        chan.clear_all();
        chan.close();
        worker.await.expect("worker exits cleanly");

        let calls = presenter.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec!["render a", "update a", "destroy a", "clear_all"]
        );
    }

    #[tokio::test]
    async fn presenter_panic_is_isolated_and_reported() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();
        let (chan, worker) = PresenterChannel::spawn(Arc::new(Panicky), bus);

        chan.render(record("a"));
        chan.close();
        worker.await.expect("worker survives the panic");

        let ev = rx.recv().await.expect("diagnostic published");
        assert_eq!(ev.kind, EventKind::PresenterPanicked);
    }

    #[tokio::test]
    async fn close_drains_commands_queued_before_it() {
        let presenter = Arc::new(Recording::default());
        let bus = Bus::new(8);
        let (chan, worker) = PresenterChannel::spawn(presenter.clone(), bus);

        chan.render(record("a"));
        chan.render(record("b"));
        chan.close();
        chan.render(record("c"));
        worker.await.expect("worker exits");

        let calls = presenter.calls.lock().unwrap();
        assert_eq!(*calls, vec!["render a", "render b"], "c came after close");
    }
}
