//! Status codes, legacy tags and reason strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Domain reported in every error info detail.
pub const ERROR_DOMAIN: &str = "turnstile.dev";

/// gRPC status codes used by API errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GrpcCode {
    Ok,
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
}

impl GrpcCode {
    /// Numeric value on the wire.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Cancelled => 1,
            Self::Unknown => 2,
            Self::InvalidArgument => 3,
            Self::DeadlineExceeded => 4,
            Self::NotFound => 5,
            Self::AlreadyExists => 6,
            Self::PermissionDenied => 7,
            Self::ResourceExhausted => 8,
            Self::FailedPrecondition => 9,
            Self::Aborted => 10,
            Self::OutOfRange => 11,
            Self::Unimplemented => 12,
            Self::Internal => 13,
            Self::Unavailable => 14,
            Self::DataLoss => 15,
            Self::Unauthenticated => 16,
        }
    }

    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::NotFound => "NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Self::FailedPrecondition => "FAILED_PRECONDITION",
            Self::Aborted => "ABORTED",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::Internal => "INTERNAL",
            Self::Unavailable => "UNAVAILABLE",
            Self::DataLoss => "DATA_LOSS",
            Self::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl fmt::Display for GrpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legacy error tags returned as `errorCode` in response bodies.
pub mod tag {
    pub const STATE_STORE_NOT_FOUND: &str = "ERR_STATE_STORE_NOT_FOUND";
    pub const STATE_STORE_NOT_CONFIGURED: &str = "ERR_STATE_STORE_NOT_CONFIGURED";
    pub const STATE_STORE_NOT_SUPPORTED: &str = "ERR_STATE_STORE_NOT_SUPPORTED";
    pub const STATE_STORE_TOO_MANY_TRANSACTIONS: &str = "ERR_STATE_STORE_TOO_MANY_TRANSACTIONS";
    pub const STATE_QUERY: &str = "ERR_STATE_QUERY";
    pub const MALFORMED_REQUEST: &str = "ERR_MALFORMED_REQUEST";
}

/// Machine readable reasons, without the `STATE_` prefix.
pub mod reason {
    /// Prefix applied to every state store reason.
    pub const PREFIX: &str = "STATE_";

    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const NOT_CONFIGURED: &str = "NOT_CONFIGURED";
    pub const ILLEGAL_KEY: &str = "ILLEGAL_KEY";
    pub const TRANSACTIONS_NOT_SUPPORTED: &str = "TRANSACTIONS_NOT_SUPPORTED";
    pub const TOO_MANY_TRANSACTIONS: &str = "TOO_MANY_TRANSACTIONS";
    pub const QUERYING_NOT_SUPPORTED: &str = "QUERYING_NOT_SUPPORTED";
    pub const QUERY_FAILED: &str = "QUERY_FAILED";
}
