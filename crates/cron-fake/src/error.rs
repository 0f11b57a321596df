//! Error types for cron engines.

use thiserror::Error;

/// Errors returned by a [`CronEngine`](crate::CronEngine).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CronError {
    /// The engine stopped because shutdown was signalled.
    #[error("cron engine cancelled")]
    Cancelled,

    #[error("cron engine failed: {reason}")]
    Engine { reason: String },

    #[error("cron client unavailable: {reason}")]
    ClientUnavailable { reason: String },
}

impl CronError {
    /// Create an engine failure error.
    pub fn engine(reason: impl Into<String>) -> Self {
        Self::Engine {
            reason: reason.into(),
        }
    }

    /// Create a client failure error.
    pub fn client_unavailable(reason: impl Into<String>) -> Self {
        Self::ClientUnavailable {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type for cron operations
pub type CronResult<T> = Result<T, CronError>;
