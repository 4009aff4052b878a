//! # Manager configuration.
//!
//! Provides [`Config`] centralized settings for a [`ToastManager`] instance.
//!
//! Config is used in two ways:
//! 1. **Manager creation**: `ToastManager::builder(config)`
//! 2. **Emitter defaults**: the typed emitters (`success`, `error`, ...) and
//!    the `track` helper read their default duration and messages from it.
//!
//! ## Sentinel values
//! - `default_duration = 0ms` → emitters produce sticky toasts by default
//!   (never auto-dismissed)
//! - `grace = 0s` → shutdown does not wait for the presenter queue to drain
//!
//! [`ToastManager`]: crate::ToastManager

use std::sync::Arc;
use std::time::Duration;

/// Configuration for a toast manager instance.
///
/// ## Field semantics
/// - `default_duration`: auto-dismiss delay used by the typed emitters and
///   as the `track` settle duration fallback (`0ms` = sticky)
/// - `pending_message` / `success_message` / `error_message`: `track`
///   fallbacks when a [`TrackConfig`](crate::TrackConfig) leaves them unset
/// - `bus_capacity`: event bus ring buffer size (min 1; clamped by the Bus)
/// - `grace`: maximum wait for the presenter queue to drain on shutdown
#[derive(Clone, Debug)]
pub struct Config {
    /// Auto-dismiss delay for toasts emitted without an explicit duration.
    ///
    /// `Duration::ZERO` makes emitted toasts sticky by default.
    pub default_duration: Duration,

    /// Default content of the loading toast opened by `track`.
    pub pending_message: Arc<str>,

    /// Default content of the success toast `track` settles into.
    pub success_message: Arc<str>,

    /// Fallback content of the error toast `track` settles into, used when
    /// the operation's failure renders to an empty message.
    pub error_message: Arc<str>,

    /// Capacity of the event bus broadcast ring buffer.
    ///
    /// Receivers that lag behind by more than `bus_capacity` events observe
    /// `Lagged` and skip the oldest items. Minimum value is 1 (enforced by
    /// the Bus).
    pub bus_capacity: usize,

    /// Maximum time `shutdown()` waits for the presenter queue to drain
    /// before reporting `RuntimeError::GraceExceeded`.
    pub grace: Duration,
}

impl Config {
    /// Returns the default emitter duration as an `Option`.
    ///
    /// - `None` → emitted toasts are sticky
    /// - `Some(d)` → emitted toasts auto-dismiss after `d`
    #[inline]
    pub fn emit_duration(&self) -> Option<Duration> {
        if self.default_duration == Duration::ZERO {
            None
        } else {
            Some(self.default_duration)
        }
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `default_duration = 3000ms`
    /// - `pending_message = "Loading..."`
    /// - `success_message = "Operation succeeded"`
    /// - `error_message = "Operation failed"`
    /// - `bus_capacity = 256`
    /// - `grace = 5s`
    fn default() -> Self {
        Self {
            default_duration: Duration::from_millis(3000),
            pending_message: Arc::from("Loading..."),
            success_message: Arc::from("Operation succeeded"),
            error_message: Arc::from("Operation failed"),
            bus_capacity: 256,
            grace: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_default_duration_means_sticky() {
        let mut cfg = Config::default();
        cfg.default_duration = Duration::ZERO;
        assert_eq!(cfg.emit_duration(), None);
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = Config::default();
        assert_eq!(cfg.emit_duration(), Some(Duration::from_millis(3000)));
        assert_eq!(cfg.bus_capacity_clamped(), 256);
        assert_eq!(&*cfg.pending_message, "Loading...");
    }
}
