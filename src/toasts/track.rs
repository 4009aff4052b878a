//! # Per-call configuration for [`ToastManager::track`].
//!
//! [`TrackConfig`] overrides the pending/success/error messages and the
//! settle duration for one tracked operation. Every field is optional; the
//! manager falls back to the defaults in
//! [`Config`](crate::Config) for anything left unset.
//!
//! [`ToastManager::track`]: crate::ToastManager::track

use std::sync::Arc;
use std::time::Duration;

/// Message and duration overrides for one tracked operation.
///
/// ## Example
/// ```
/// use std::time::Duration;
/// use toastvisor::TrackConfig;
///
/// let cfg = TrackConfig::default()
///     .with_pending("Uploading...")
///     .with_success("Upload complete")
///     .with_duration(Duration::from_secs(5));
///
/// assert_eq!(cfg.pending.as_deref(), Some("Uploading..."));
/// assert_eq!(cfg.error, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrackConfig {
    /// Content of the loading toast while the operation is in flight.
    pub pending: Option<Arc<str>>,
    /// Content shown when the operation succeeds.
    pub success: Option<Arc<str>>,
    /// Fallback content when the operation fails without a usable message.
    pub error: Option<Arc<str>>,
    /// Auto-dismiss duration of the settled (success/error) toast.
    pub duration: Option<Duration>,
}

impl TrackConfig {
    /// Sets the pending message.
    pub fn with_pending(mut self, content: impl Into<Arc<str>>) -> Self {
        self.pending = Some(content.into());
        self
    }

    /// Sets the success message.
    pub fn with_success(mut self, content: impl Into<Arc<str>>) -> Self {
        self.success = Some(content.into());
        self
    }

    /// Sets the fallback error message.
    pub fn with_error(mut self, content: impl Into<Arc<str>>) -> Self {
        self.error = Some(content.into());
        self
    }

    /// Sets the settle duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}
