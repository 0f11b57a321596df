//! State Errors - structured API errors for state store failures
//!
//! Maps named state store failure conditions to [`ApiError`] values that
//! carry everything a gateway needs to answer a caller:
//!
//! - gRPC status code and HTTP status
//! - human readable message and legacy error tag (`ERR_...`)
//! - machine readable reason (`STATE_...`) with metadata
//! - optional resource info, field violation and help link
//!
//! # Example
//!
//! ```rust
//! use state_errors::{GrpcCode, StateStoreError};
//!
//! let err = StateStoreError::new("redis").not_found("checkout");
//!
//! assert_eq!(err.grpc_code(), GrpcCode::InvalidArgument);
//! assert_eq!(err.http_status().as_u16(), 400);
//! assert_eq!(err.to_string(), "state store redis is not found");
//! assert_eq!(err.reason(), "STATE_NOT_FOUND");
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

mod api_error;
mod codes;
mod state;

pub use api_error::{ApiError, ApiErrorBuilder, ErrorInfo, FieldViolation, HelpLink, ResourceInfo};
pub use codes::{ERROR_DOMAIN, GrpcCode, reason, tag};
pub use state::{STATE_RESOURCE_TYPE, SUPPORTED_STORES_DOC_URL, StateStoreError};
