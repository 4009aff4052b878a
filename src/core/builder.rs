//! # Builder for [`ToastManager`] instances.
//!
//! Wires the bus, the presenter worker, and the intent listener, and hands
//! back a shared `Arc<ToastManager>`. Explicit construction (instead of a
//! process-wide singleton) keeps instances isolated: tests and embedders
//! create as many managers as they need, each with its own bus, registry,
//! and timers.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::manager::ToastManager;
use crate::events::Bus;
use crate::present::channel::PresenterChannel;
use crate::present::{NoopPresenter, Present};
use crate::toasts::{IdGen, UuidGen};

/// Builder for constructing a [`ToastManager`] with optional collaborators.
pub struct ToastManagerBuilder {
    cfg: Config,
    presenter: Option<Arc<dyn Present>>,
    ids: Option<Arc<dyn IdGen>>,
}

impl ToastManagerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            presenter: None,
            ids: None,
        }
    }

    /// Sets the presentation collaborator.
    ///
    /// Defaults to a presenter that discards every command, which keeps the
    /// lifecycle observable through bus events alone.
    pub fn with_presenter(mut self, presenter: Arc<dyn Present>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Sets the fresh-id source.
    ///
    /// Defaults to [`UuidGen`] (random v4 UUIDs).
    pub fn with_id_gen(mut self, ids: Arc<dyn IdGen>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Builds and returns the manager.
    ///
    /// This consumes the builder and initializes all runtime components:
    /// - event bus for intents and notifications
    /// - presenter worker (queued, panic-isolated delivery)
    /// - intent listener consuming `*Requested` events from the bus
    ///
    /// Must be called within a Tokio runtime.
    pub fn build(self) -> Arc<ToastManager> {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let presenter_impl = self
            .presenter
            .unwrap_or_else(|| Arc::new(NoopPresenter));
        let ids = self.ids.unwrap_or_else(|| Arc::new(UuidGen));
        let runtime_token = CancellationToken::new();

        let (presenter, worker) = PresenterChannel::spawn(presenter_impl, bus.clone());

        let manager = Arc::new(ToastManager::new_internal(
            self.cfg,
            bus,
            ids,
            presenter,
            worker,
            runtime_token,
        ));

        manager.clone().spawn_listener();
        manager
    }
}
