//! Error types for the actor lock.
//!
//! Lock failures are synchronous and non-fatal: a rejected `lock` leaves the
//! lock state untouched, so the caller never owes a compensating `unlock`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the invocation dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockError {
    /// Admitting the call would exceed the configured reentrancy ceiling.
    #[error("maximum stack depth exceeded (limit {max_stack_depth})")]
    MaxStackDepthExceeded {
        /// Configured ceiling of the lock that rejected the call
        max_stack_depth: u32,
    },

    /// A request id was built from an empty string.
    #[error("request id must not be empty")]
    EmptyRequestId,
}

impl LockError {
    /// Create a `MaxStackDepthExceeded` error
    #[must_use]
    pub const fn max_stack_depth_exceeded(max_stack_depth: u32) -> Self {
        Self::MaxStackDepthExceeded { max_stack_depth }
    }

    /// True when the failure is a reentrancy ceiling violation rather than a
    /// malformed request.
    #[must_use]
    pub const fn is_max_stack_depth_exceeded(&self) -> bool {
        matches!(self, Self::MaxStackDepthExceeded { .. })
    }
}

/// Result type for lock operations
pub type LockResult<T> = Result<T, LockError>;

/// Errors raised while loading a [`LockConfig`](crate::LockConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    /// Create a read failure error.
    pub fn read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a parse failure error.
    pub fn parse_failed(reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a validation error.
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
