//! Error types used by the toastvisor runtime.
//!
//! The four intent operations are total by contract (unknown ids degrade to
//! no-ops or overwrites, never errors), so the only fallible surface is
//! teardown: [`RuntimeError`] covers failures of the orchestration itself.

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by the toastvisor runtime.
///
/// These represent failures in the lifecycle machinery itself, such as a
/// shutdown sequence exceeding its grace period. Toast operations
/// (`add`/`update`/`remove`/`clear` and the emitters) are infallible.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Shutdown grace period was exceeded; the presenter queue did not drain
    /// in time and the worker was abandoned.
    #[error("shutdown grace {grace:?} exceeded; presenter queue did not drain")]
    GraceExceeded {
        /// The configured grace duration.
        grace: Duration,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use toastvisor::RuntimeError;
    ///
    /// let err = RuntimeError::GraceExceeded { grace: Duration::from_secs(5) };
    /// assert_eq!(err.as_label(), "runtime_grace_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::GraceExceeded { .. } => "runtime_grace_exceeded",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RuntimeError::GraceExceeded { grace } => {
                format!("grace exceeded after {grace:?}; presenter abandoned")
            }
        }
    }
}
