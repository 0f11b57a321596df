//! Errors for a named state store.

use std::collections::BTreeMap;

use http::StatusCode;

use crate::api_error::{ApiError, ApiErrorBuilder};
use crate::codes::{GrpcCode, reason, tag};

/// Resource type reported in resource info details.
pub const STATE_RESOURCE_TYPE: &str = "state";

/// Documentation listing which stores support which features.
pub const SUPPORTED_STORES_DOC_URL: &str =
    "https://docs.dapr.io/reference/components-reference/supported-state-stores/";

/// Error factory bound to one state store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStoreError {
    name: String,
}

impl StateStoreError {
    /// Create a factory for the store called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name of the store.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The store is not known to the runtime.
    #[must_use]
    pub fn not_found(&self, app_id: &str) -> ApiError {
        let builder = ApiErrorBuilder::new(
            GrpcCode::InvalidArgument,
            StatusCode::BAD_REQUEST,
            format!("state store {} is not found", self.name),
            tag::STATE_STORE_NOT_FOUND,
        );
        Self::finish(builder, reason::NOT_FOUND, app_metadata(app_id))
    }

    /// The store exists but no component is configured for it.
    #[must_use]
    pub fn not_configured(&self, app_id: &str) -> ApiError {
        let builder = ApiErrorBuilder::new(
            GrpcCode::FailedPrecondition,
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("state store {} is not configured", self.name),
            tag::STATE_STORE_NOT_CONFIGURED,
        );
        Self::finish(builder, reason::NOT_CONFIGURED, app_metadata(app_id))
    }

    /// A key was rejected by the store.
    #[must_use]
    pub fn invalid_key_name(&self, key: &str, message: &str) -> ApiError {
        let builder = ApiErrorBuilder::new(
            GrpcCode::InvalidArgument,
            StatusCode::BAD_REQUEST,
            message,
            tag::MALFORMED_REQUEST,
        )
        .with_field_violation(key, message);
        self.finish_with_resource(builder, reason::ILLEGAL_KEY, BTreeMap::new())
    }

    /// The store has no transaction support.
    #[must_use]
    pub fn transactions_not_supported(&self) -> ApiError {
        let builder = ApiErrorBuilder::new(
            GrpcCode::Unimplemented,
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("state store {} doesn't support transactions", self.name),
            tag::STATE_STORE_NOT_SUPPORTED,
        )
        .with_help_link(
            SUPPORTED_STORES_DOC_URL,
            "Check the list of state stores and the features they support",
        );
        self.finish_with_resource(builder, reason::TRANSACTIONS_NOT_SUPPORTED, BTreeMap::new())
    }

    /// A transaction carries more operations than the store accepts.
    #[must_use]
    pub fn too_many_transactional_ops(&self, count: usize, max: usize) -> ApiError {
        let builder = ApiErrorBuilder::new(
            GrpcCode::InvalidArgument,
            StatusCode::BAD_REQUEST,
            format!(
                "the transaction contains {count} operations, which is more than what the state store supports: {max}"
            ),
            tag::STATE_STORE_TOO_MANY_TRANSACTIONS,
        );
        let metadata = BTreeMap::from([
            ("currentOpsTransaction".to_string(), count.to_string()),
            ("maxOpsPerTransaction".to_string(), max.to_string()),
        ]);
        self.finish_with_resource(builder, reason::TOO_MANY_TRANSACTIONS, metadata)
    }

    /// The store can't run queries.
    #[must_use]
    pub fn query_unsupported(&self) -> ApiError {
        let builder = ApiErrorBuilder::new(
            GrpcCode::Internal,
            StatusCode::INTERNAL_SERVER_ERROR,
            "state store does not support querying",
            tag::STATE_STORE_NOT_SUPPORTED,
        );
        self.finish_with_resource(builder, reason::QUERYING_NOT_SUPPORTED, BTreeMap::new())
    }

    /// A query reached the store and failed there.
    #[must_use]
    pub fn query_failed(&self, detail: &str) -> ApiError {
        let builder = ApiErrorBuilder::new(
            GrpcCode::Internal,
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("state store {} query failed: {detail}", self.name),
            tag::STATE_QUERY,
        );
        self.finish_with_resource(builder, reason::QUERY_FAILED, BTreeMap::new())
    }

    fn finish_with_resource(
        &self,
        builder: ApiErrorBuilder,
        condition: &str,
        metadata: BTreeMap<String, String>,
    ) -> ApiError {
        let builder = builder.with_resource_info(STATE_RESOURCE_TYPE, &self.name, "", "");
        Self::finish(builder, condition, metadata)
    }

    fn finish(
        builder: ApiErrorBuilder,
        condition: &str,
        metadata: BTreeMap<String, String>,
    ) -> ApiError {
        builder
            .with_error_info(format!("{}{condition}", reason::PREFIX), metadata)
            .build()
    }
}

// Lookup failures carry the calling app instead of the store as context.
fn app_metadata(app_id: &str) -> BTreeMap<String, String> {
    if app_id.is_empty() {
        BTreeMap::new()
    } else {
        BTreeMap::from([("appID".to_string(), app_id.to_string())])
    }
}
