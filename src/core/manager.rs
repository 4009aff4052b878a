//! # ToastManager: the toast lifecycle manager.
//!
//! Coordinates the registry of live toasts, one cancellable auto-dismiss
//! timer per toast, and projection through the presenter channel. It is the
//! single writer of toast state: every intent - direct call, bus request, or
//! timer expiry - funnels into the same four operations.
//!
//! ## Architecture
//! ```text
//! callers ──► add / update / remove / clear ──┐
//! Emitter ──► Bus ──► intent listener ────────┤
//! timer fires ──► expire (internal remove) ───┤
//!                                             ▼
//!                               RwLock<State { Registry, Timers }>
//!                                 │                │
//!                                 │                └─► arm/cancel sleep tasks
//!                                 ▼
//!                          PresenterChannel ──► Present impl
//!                                 │
//!                                 └─► Bus notifications (Added, Expired, ...)
//! ```
//!
//! ## Rules
//! - State mutations happen under one write lock, and nothing awaits while
//!   holding it: registry ops, timer arming, presenter enqueues, and bus
//!   publishes are all synchronous. Cancel-then-rearm is therefore atomic
//!   with respect to other intents - no moment exists where two timers are
//!   armed for one id.
//! - Intents for the same id apply in issue order (the write lock queues
//!   them); intents for different ids carry no mutual ordering guarantee.
//! - A fired timer re-checks its sequence number and the registry under the
//!   lock before acting, so cancelled or superseded timers never remove a
//!   record that an `update` just revived.
//! - Registry mutation is synchronous and precedes the presenter command:
//!   the instant `remove` returns, liveness queries are correct even while
//!   the element still plays its exit transition.

use std::future::Future;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{RwLock, broadcast};
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::registry::Registry;
use crate::core::timer::{self, TimerHandle, Timers};
use crate::error::RuntimeError;
use crate::events::{Bus, Event, EventKind};
use crate::present::channel::PresenterChannel;
use crate::toasts::{IdGen, ToastId, ToastKind, ToastRecord, TrackConfig};

/// Mutable manager state: the registry plus the armed timers.
///
/// Kept together behind one lock so registry mutations and timer
/// cancel/re-arm are a single atomic step.
struct State {
    registry: Registry,
    timers: Timers,
}

/// Toast lifecycle manager.
///
/// Create instances with [`ToastManager::builder`]; the builder wires the
/// bus, the presenter worker, and the intent listener. Instances are shared
/// as `Arc<ToastManager>` and are safe to use from multiple tasks.
pub struct ToastManager {
    cfg: Config,
    bus: Bus,
    ids: Arc<dyn IdGen>,
    presenter: PresenterChannel,
    presenter_worker: StdMutex<Option<JoinHandle<()>>>,
    state: Arc<RwLock<State>>,
    runtime_token: CancellationToken,
}

impl ToastManager {
    /// Starts building a manager with the given configuration.
    pub fn builder(cfg: Config) -> crate::core::builder::ToastManagerBuilder {
        crate::core::builder::ToastManagerBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        cfg: Config,
        bus: Bus,
        ids: Arc<dyn IdGen>,
        presenter: PresenterChannel,
        presenter_worker: JoinHandle<()>,
        runtime_token: CancellationToken,
    ) -> Self {
        Self {
            cfg,
            bus,
            ids,
            presenter,
            presenter_worker: StdMutex::new(Some(presenter_worker)),
            state: Arc::new(RwLock::new(State {
                registry: Registry::new(),
                timers: Timers::default(),
            })),
            runtime_token,
        }
    }

    /// Returns a handle to the event bus.
    ///
    /// Subscribe to observe lifecycle notifications, or hand it to an
    /// [`Emitter`](crate::Emitter) to fire intents without holding the
    /// manager.
    pub fn bus(&self) -> Bus {
        self.bus.clone()
    }

    /// Returns the manager configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    // ---------------------------
    // Intents
    // ---------------------------

    /// Adds `record` and renders it.
    ///
    /// `record.id` must be fresh; a reused live id degrades to an overwrite
    /// of that record (caller misuse, not validated here). Arms an
    /// auto-dismiss timer when the record has a positive duration.
    pub async fn add(&self, record: ToastRecord) {
        let mut state = self.state.write().await;
        state.registry.set(record.clone());
        self.presenter.render(record.clone());
        self.arm_if_needed(&mut state, &record);
        self.bus
            .publish(Event::new(EventKind::Added).with_record(record));
    }

    /// Replaces the record under `record.id` and updates its element.
    ///
    /// Any armed timer for the id is cancelled before the overwrite and a
    /// fresh one is armed when the new duration is positive, so the dismiss
    /// deadline counts from the update. An update against an id that was
    /// never added still overwrites the registry (the record becomes live)
    /// but only issues an element update - no element is created.
    pub async fn update(&self, record: ToastRecord) {
        let mut state = self.state.write().await;
        if let Some(old) = state.timers.take(&record.id) {
            old.cancel();
        }
        state.registry.set(record.clone());
        self.presenter.update(record.clone());
        self.arm_if_needed(&mut state, &record);
        self.bus
            .publish(Event::new(EventKind::Updated).with_record(record));
    }

    /// Removes the toast under `id`.
    ///
    /// Idempotent: removing an absent or already-removed id is a no-op. The
    /// registry entry is gone the instant this returns; the element's exit
    /// transition is the presenter's business.
    pub async fn remove(&self, id: &ToastId) {
        let mut state = self.state.write().await;
        if Self::dismiss_locked(&mut state, &self.presenter, id) {
            self.bus
                .publish(Event::new(EventKind::Removed).with_id(id.clone()));
        }
    }

    /// Discards every live toast at once, without per-item exit transitions.
    ///
    /// Cancels all armed timers; timers that already fired find the registry
    /// empty and become no-ops.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.timers.cancel_all();
        state.registry.clear();
        self.presenter.clear_all();
        self.bus.publish(Event::new(EventKind::Cleared));
    }

    // ---------------------------
    // Typed emitters (derived, no extra state)
    // ---------------------------

    /// Shows a toast of the given kind; returns its fresh id.
    ///
    /// `Duration::ZERO` makes the toast sticky.
    pub async fn notify(
        &self,
        kind: ToastKind,
        content: impl Into<Arc<str>>,
        duration: Duration,
    ) -> ToastId {
        let id = self.ids.fresh();
        let record = ToastRecord::new(id.clone(), kind, content, duration);
        self.add(record).await;
        id
    }

    /// Shows a success toast with the default duration.
    pub async fn success(&self, content: impl Into<Arc<str>>) -> ToastId {
        self.notify(ToastKind::Success, content, self.cfg.default_duration)
            .await
    }

    /// Shows an error toast with the default duration.
    pub async fn error(&self, content: impl Into<Arc<str>>) -> ToastId {
        self.notify(ToastKind::Error, content, self.cfg.default_duration)
            .await
    }

    /// Shows a warning toast with the default duration.
    pub async fn warning(&self, content: impl Into<Arc<str>>) -> ToastId {
        self.notify(ToastKind::Warning, content, self.cfg.default_duration)
            .await
    }

    /// Shows an info toast with the default duration.
    pub async fn info(&self, content: impl Into<Arc<str>>) -> ToastId {
        self.notify(ToastKind::Info, content, self.cfg.default_duration)
            .await
    }

    /// Shows a sticky loading toast; returns its id so the caller can later
    /// `update_to` or `remove` it.
    pub async fn loading(&self, content: impl Into<Arc<str>>) -> ToastId {
        self.notify(ToastKind::Loading, content, Duration::ZERO).await
    }

    /// Updates the toast under `id` to a new kind, content, and duration.
    pub async fn update_to(
        &self,
        id: ToastId,
        kind: ToastKind,
        content: impl Into<Arc<str>>,
        duration: Duration,
    ) {
        self.update(ToastRecord::new(id, kind, content, duration))
            .await;
    }

    /// Tracks an async operation with a loading toast.
    ///
    /// Shows a sticky loading toast with the pending message, awaits
    /// `operation`, then updates the toast to success or error on
    /// settlement. The operation's own result is always forwarded unchanged:
    /// failure visibility on the toast does not swallow the control-flow
    /// signal. The error toast's content is the failure's `Display`
    /// rendering, falling back to the configured default when that renders
    /// empty.
    ///
    /// Only this call suspends on the operation; the manager stays free to
    /// process intents for other ids while it is pending.
    ///
    /// ## Example
    /// ```no_run
    /// # async fn example(toasts: &toastvisor::ToastManager) -> Result<(), std::io::Error> {
    /// use toastvisor::TrackConfig;
    ///
    /// let bytes = toasts
    ///     .track(
    ///         async { Ok::<_, std::io::Error>(42u64) },
    ///         TrackConfig::default()
    ///             .with_pending("Uploading...")
    ///             .with_success("Upload complete"),
    ///     )
    ///     .await?;
    /// # let _ = bytes; Ok(()) }
    /// ```
    pub async fn track<T, E, Fut>(&self, operation: Fut, overrides: TrackConfig) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        let pending = overrides
            .pending
            .unwrap_or_else(|| self.cfg.pending_message.clone());
        let duration = overrides.duration.unwrap_or(self.cfg.default_duration);
        let id = self.loading(pending).await;

        match operation.await {
            Ok(value) => {
                let content = overrides
                    .success
                    .unwrap_or_else(|| self.cfg.success_message.clone());
                self.update_to(id, ToastKind::Success, content, duration).await;
                Ok(value)
            }
            Err(err) => {
                let rendered = err.to_string();
                let content: Arc<str> = if rendered.is_empty() {
                    overrides
                        .error
                        .unwrap_or_else(|| self.cfg.error_message.clone())
                } else {
                    Arc::from(rendered)
                };
                self.update_to(id, ToastKind::Error, content, duration).await;
                Err(err)
            }
        }
    }

    // ---------------------------
    // Queries
    // ---------------------------

    /// True if a toast is live under `id`.
    pub async fn is_live(&self, id: &ToastId) -> bool {
        self.state.read().await.registry.has(id)
    }

    /// Number of live toasts.
    pub async fn live_count(&self) -> usize {
        self.state.read().await.registry.len()
    }

    /// Returns a snapshot of the live record under `id`, if any.
    pub async fn get(&self, id: &ToastId) -> Option<ToastRecord> {
        self.state.read().await.registry.get(id).cloned()
    }

    // ---------------------------
    // Teardown
    // ---------------------------

    /// Tears the manager down: cancels the intent listener and every armed
    /// timer, discards all records and elements, then waits up to
    /// [`Config::grace`] for the presenter queue to drain.
    ///
    /// A zero grace skips the wait. Intents issued after shutdown still
    /// mutate the registry but no timers fire and requests over the bus are
    /// no longer consumed; the manager is meant to be dropped afterwards.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        self.bus.publish(Event::new(EventKind::ShutdownRequested));
        self.runtime_token.cancel();

        {
            let mut state = self.state.write().await;
            state.timers.cancel_all();
            state.registry.clear();
            self.presenter.clear_all();
        }

        self.presenter.close();
        let worker = self.presenter_worker.lock().expect("worker slot").take();
        if let Some(worker) = worker {
            if self.cfg.grace == Duration::ZERO {
                return Ok(());
            }
            if time::timeout(self.cfg.grace, worker).await.is_err() {
                self.bus.publish(Event::new(EventKind::GraceExceeded));
                return Err(RuntimeError::GraceExceeded {
                    grace: self.cfg.grace,
                });
            }
        }
        Ok(())
    }

    // ---------------------------
    // Intent listener (bus adapter)
    // ---------------------------

    /// Spawns the listener that consumes `*Requested` events from the bus.
    ///
    /// Call once during manager init (the builder does). Runs until the
    /// runtime token is cancelled or the bus closes.
    pub(crate) fn spawn_listener(self: Arc<Self>) {
        let mut rx = self.bus.subscribe();
        let rt = self.runtime_token.clone();
        let me = self.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = rt.cancelled() => break,
                    msg = rx.recv() => match msg {
                        Ok(ev) => me.handle_request(ev).await,
                        Err(broadcast::error::RecvError::Closed) => break,
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            me.bus.publish(
                                Event::new(EventKind::ListenerLagged)
                                    .with_reason(format!("skipped {n} events")),
                            );
                            continue;
                        }
                    }
                }
            }
        });
    }

    /// Applies one request event; notifications and diagnostics are ignored.
    async fn handle_request(&self, event: Event) {
        match event.kind {
            EventKind::AddRequested => {
                if let Some(record) = event.record {
                    self.add(record).await;
                }
            }
            EventKind::UpdateRequested => {
                if let Some(record) = event.record {
                    self.update(record).await;
                }
            }
            EventKind::RemoveRequested => {
                if let Some(id) = event.id {
                    self.remove(&id).await;
                }
            }
            EventKind::ClearRequested => self.clear().await,
            _ => {}
        }
    }

    // ---------------------------
    // Helpers (DRY)
    // ---------------------------

    /// Shared dismissal steps for `remove` and timer expiry: disarm the
    /// timer, delete the record, queue the element's destruction. Returns
    /// whether a record was actually live.
    fn dismiss_locked(state: &mut State, presenter: &PresenterChannel, id: &ToastId) -> bool {
        if let Some(handle) = state.timers.take(id) {
            handle.cancel();
        }
        if state.registry.delete(id) {
            presenter.destroy(id.clone());
            true
        } else {
            false
        }
    }

    /// Arms an auto-dismiss timer when `record` has a positive duration.
    ///
    /// Any handle the insert displaces is cancelled, preserving the
    /// one-timer-per-id invariant even on misuse (`add` under a live id).
    fn arm_if_needed(&self, state: &mut State, record: &ToastRecord) {
        if let Some(delay) = record.auto_dismiss() {
            let handle = self.arm(record.id.clone(), delay);
            if let Some(old) = state.timers.insert(record.id.clone(), handle) {
                old.cancel();
            }
        }
    }

    /// Spawns the sleeping task for one auto-dismiss timer.
    fn arm(&self, id: ToastId, delay: Duration) -> TimerHandle {
        let seq = timer::next_seq();
        let cancel = self.runtime_token.child_token();
        let token = cancel.clone();
        let state = Arc::clone(&self.state);
        let presenter = self.presenter.clone();
        let bus = self.bus.clone();

        let join = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = time::sleep(delay) => {
                    Self::expire(state, presenter, bus, id, seq).await;
                }
            }
        });

        TimerHandle { seq, cancel, join }
    }

    /// Timer-fired path: performs the same steps as `remove`, guarded.
    ///
    /// Only acts if this timer is still the one armed for `id` (sequence
    /// match) and the record is still live - an update, remove, or clear
    /// that raced the firing makes this a no-op.
    async fn expire(
        state: Arc<RwLock<State>>,
        presenter: PresenterChannel,
        bus: Bus,
        id: ToastId,
        seq: u64,
    ) {
        let mut state = state.write().await;
        if state.timers.seq_of(&id) != Some(seq) {
            return;
        }
        if Self::dismiss_locked(&mut state, &presenter, &id) {
            bus.publish(Event::new(EventKind::Expired).with_id(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::Present;
    use crate::toasts::SerialGen;
    use async_trait::async_trait;
    use std::fmt;
    use std::sync::Mutex;

    /// Presenter double that records every call in issue order.
    #[derive(Default)]
    struct RecordingPresenter {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingPresenter {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Present for RecordingPresenter {
        async fn render(&self, record: &ToastRecord) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("render {} {} {:?}", record.id, record.kind, record.content));
        }
        async fn update(&self, record: &ToastRecord) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("update {} {} {:?}", record.id, record.kind, record.content));
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

    #[derive(Debug)]
    struct Boom(&'static str);

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    fn manager() -> (Arc<ToastManager>, Arc<RecordingPresenter>) {
        let presenter = Arc::new(RecordingPresenter::default());
        let mgr = ToastManager::builder(Config::default())
            .with_presenter(presenter.clone())
            .with_id_gen(Arc::new(SerialGen::new("t")))
            .build();
        (mgr, presenter)
    }

    /// Lets spawned tasks (timers, listener, presenter worker) run.
    async fn settle() {
        for _ in 0..16 {
            tokio::task::yield_now().await;
        }
    }

    fn kinds(rx: &mut broadcast::Receiver<Event>) -> Vec<(EventKind, Option<String>)> {
        let mut out = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            out.push((ev.kind, ev.id.map(|id| id.to_string())));
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn add_renders_and_expires_after_duration() {
        let (mgr, presenter) = manager();
        let mut rx = mgr.bus().subscribe();

        let id = mgr
            .notify(ToastKind::Info, "hello", Duration::from_millis(100))
            .await;
        settle().await;
        assert!(mgr.is_live(&id).await);

        time::advance(Duration::from_millis(99)).await;
        settle().await;
        assert!(mgr.is_live(&id).await, "not yet expired at 99ms");

        time::advance(Duration::from_millis(2)).await;
        settle().await;
        assert!(!mgr.is_live(&id).await, "expired after its duration");

        assert_eq!(
            presenter.calls(),
            vec![
                format!("render {id} info \"hello\""),
                format!("destroy {id}"),
            ]
        );
        let seen = kinds(&mut rx);
        assert!(seen.contains(&(EventKind::Expired, Some(id.to_string()))));
    }

    #[tokio::test(start_paused = true)]
    async fn sticky_toast_is_never_auto_removed() {
        let (mgr, _presenter) = manager();

        let id = mgr.loading("working").await;
        settle().await;

        time::advance(Duration::from_secs(3600)).await;
        settle().await;
        assert!(mgr.is_live(&id).await, "sticky toast survives an hour");
    }

    #[tokio::test(start_paused = true)]
    async fn remove_is_idempotent() {
        let (mgr, presenter) = manager();

        let id = mgr.success("done").await;
        settle().await;

        mgr.remove(&id).await;
        mgr.remove(&id).await;
        settle().await;

        assert!(!mgr.is_live(&id).await);
        let destroys = presenter
            .calls()
            .iter()
            .filter(|c| c.starts_with("destroy"))
            .count();
        assert_eq!(destroys, 1, "second remove is a no-op");
    }

    #[tokio::test(start_paused = true)]
    async fn update_reschedules_the_dismiss_deadline() {
        let (mgr, _presenter) = manager();
        let mut rx = mgr.bus().subscribe();

        let id = mgr
            .notify(ToastKind::Loading, "step 1", Duration::from_millis(100))
            .await;
        settle().await;

        time::advance(Duration::from_millis(50)).await;
        settle().await;
        mgr.update_to(id.clone(), ToastKind::Success, "step 2", Duration::from_millis(200))
            .await;
        settle().await;

        // The original 100ms timer would fire now; it must not.
        time::advance(Duration::from_millis(199)).await;
        settle().await;
        assert!(
            mgr.is_live(&id).await,
            "deadline counts from the update, not the add"
        );

        time::advance(Duration::from_millis(2)).await;
        settle().await;
        assert!(!mgr.is_live(&id).await);

        let expirations = kinds(&mut rx)
            .into_iter()
            .filter(|(k, _)| *k == EventKind::Expired)
            .count();
        assert_eq!(expirations, 1, "the stale timer never fired an effect");
    }

    #[tokio::test(start_paused = true)]
    async fn clear_discards_everything_and_silences_timers() {
        let (mgr, presenter) = manager();
        let mut rx = mgr.bus().subscribe();

        mgr.success("a").await;
        mgr.info("b").await;
        settle().await;
        assert_eq!(mgr.live_count().await, 2);

        mgr.clear().await;
        settle().await;
        assert_eq!(mgr.live_count().await, 0);

        time::advance(Duration::from_secs(10)).await;
        settle().await;

        let seen = kinds(&mut rx);
        assert!(seen.iter().all(|(k, _)| *k != EventKind::Expired));
        assert!(presenter.calls().contains(&"clear_all".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn clear_on_empty_registry_is_fine() {
        let (mgr, _presenter) = manager();
        mgr.clear().await;
        assert_eq!(mgr.live_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn update_on_absent_id_gains_a_record_but_renders_nothing() {
        let (mgr, presenter) = manager();

        let ghost: ToastId = "ghost".into();
        mgr.update_to(ghost.clone(), ToastKind::Info, "who?", Duration::ZERO)
            .await;
        settle().await;

        assert!(mgr.is_live(&ghost).await, "registry gains the record");
        let calls = presenter.calls();
        assert!(calls.iter().all(|c| !c.starts_with("render")));
        assert_eq!(calls, vec!["update ghost info \"who?\"".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn track_success_shows_loading_then_success_and_forwards_value() {
        let (mgr, presenter) = manager();

        let result: Result<u32, Boom> = mgr
            .track(
                async {
                    time::sleep(Duration::from_millis(10)).await;
                    Ok(42)
                },
                TrackConfig::default().with_pending("P").with_success("S"),
            )
            .await;
        settle().await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(
            presenter.calls(),
            vec![
                "render t-1 loading \"P\"".to_string(),
                "update t-1 success \"S\"".to_string(),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn track_failure_shows_the_error_and_reraises() {
        let (mgr, presenter) = manager();

        let result: Result<u32, Boom> = mgr
            .track(async { Err(Boom("boom")) }, TrackConfig::default())
            .await;
        settle().await;

        assert_eq!(result.unwrap_err().to_string(), "boom");
        let calls = presenter.calls();
        assert_eq!(calls[0], "render t-1 loading \"Loading...\"");
        assert_eq!(calls[1], "update t-1 error \"boom\"");
    }

    #[tokio::test(start_paused = true)]
    async fn track_failure_without_message_falls_back_to_default() {
        let (mgr, _presenter) = manager();

        let result: Result<u32, Boom> = mgr
            .track(async { Err(Boom("")) }, TrackConfig::default())
            .await;
        settle().await;

        assert!(result.is_err());
        let record = mgr.get(&"t-1".into()).await.expect("error toast live");
        assert_eq!(record.kind, ToastKind::Error);
        assert_eq!(&*record.content, "Operation failed");
    }

    #[tokio::test(start_paused = true)]
    async fn interleaved_intents_leave_exactly_the_updated_survivor() {
        let (mgr, _presenter) = manager();
        let mut rx = mgr.bus().subscribe();

        let a = mgr
            .notify(ToastKind::Info, "a", Duration::from_millis(100))
            .await;
        let b = mgr
            .notify(ToastKind::Info, "b", Duration::from_millis(100))
            .await;
        settle().await;

        mgr.remove(&a).await;
        mgr.update_to(b.clone(), ToastKind::Warning, "b2", Duration::from_millis(300))
            .await;
        settle().await;

        assert_eq!(mgr.live_count().await, 1);
        let survivor = mgr.get(&b).await.expect("b lives");
        assert_eq!(survivor.kind, ToastKind::Warning);
        assert_eq!(&*survivor.content, "b2");

        time::advance(Duration::from_secs(1)).await;
        settle().await;

        let expired: Vec<_> = kinds(&mut rx)
            .into_iter()
            .filter(|(k, _)| *k == EventKind::Expired)
            .collect();
        assert_eq!(
            expired,
            vec![(EventKind::Expired, Some(b.to_string()))],
            "a's timer never fires an effect"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn bus_requests_reach_the_manager() {
        let (mgr, _presenter) = manager();
        let emitter = crate::events::Emitter::new(mgr.bus());

        let record = ToastRecord::new("via-bus".into(), ToastKind::Info, "hi", Duration::ZERO);
        emitter.add(record);
        settle().await;
        assert!(mgr.is_live(&"via-bus".into()).await);

        emitter.remove("via-bus".into());
        settle().await;
        assert!(!mgr.is_live(&"via-bus".into()).await);

        emitter.clear();
        settle().await;
        assert_eq!(mgr.live_count().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_timers_and_drains_the_presenter() {
        let (mgr, presenter) = manager();
        let mut rx = mgr.bus().subscribe();

        mgr.success("bye").await;
        settle().await;

        mgr.shutdown().await.expect("drains within grace");
        assert_eq!(mgr.live_count().await, 0);
        assert!(presenter.calls().contains(&"clear_all".to_string()));

        time::advance(Duration::from_secs(10)).await;
        settle().await;
        let seen = kinds(&mut rx);
        assert!(
            seen.iter().all(|(k, _)| *k != EventKind::Expired),
            "no timer survives shutdown"
        );
    }
}
