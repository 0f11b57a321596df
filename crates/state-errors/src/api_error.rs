//! Structured API error and its builder.

use std::collections::BTreeMap;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::codes::{ERROR_DOMAIN, GrpcCode};

/// Machine readable cause of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    /// Upper-case reason, e.g. `STATE_NOT_FOUND`
    pub reason: String,
    /// Domain that owns the reason
    pub domain: String,
    /// Extra key/value context
    pub metadata: BTreeMap<String, String>,
}

/// Resource the failing request was addressed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceInfo {
    pub resource_type: String,
    pub resource_name: String,
    pub owner: String,
    pub description: String,
}

/// A single invalid request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub description: String,
}

/// Pointer to documentation that explains the failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpLink {
    pub url: String,
    pub description: String,
}

/// Error returned to API callers.
///
/// Displays as its human readable message; the remaining fields are exposed
/// through accessors and [`ApiError::response_body`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    grpc_code: GrpcCode,
    http_status: StatusCode,
    message: String,
    tag: String,
    error_info: Option<ErrorInfo>,
    resource_info: Option<ResourceInfo>,
    field_violation: Option<FieldViolation>,
    help_link: Option<HelpLink>,
}

impl ApiError {
    /// gRPC status code.
    #[must_use]
    pub const fn grpc_code(&self) -> GrpcCode {
        self.grpc_code
    }

    /// HTTP status code.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        self.http_status
    }

    /// Human readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Legacy `ERR_...` tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Machine readable reason, or the empty string if none was attached.
    #[must_use]
    pub fn reason(&self) -> &str {
        self.error_info
            .as_ref()
            .map_or("", |info| info.reason.as_str())
    }

    /// Metadata attached to the reason.
    #[must_use]
    pub fn metadata(&self) -> Option<&BTreeMap<String, String>> {
        self.error_info.as_ref().map(|info| &info.metadata)
    }

    #[must_use]
    pub const fn error_info(&self) -> Option<&ErrorInfo> {
        self.error_info.as_ref()
    }

    #[must_use]
    pub const fn resource_info(&self) -> Option<&ResourceInfo> {
        self.resource_info.as_ref()
    }

    #[must_use]
    pub const fn field_violation(&self) -> Option<&FieldViolation> {
        self.field_violation.as_ref()
    }

    #[must_use]
    pub const fn help_link(&self) -> Option<&HelpLink> {
        self.help_link.as_ref()
    }

    /// JSON body for HTTP responses.
    ///
    /// ```json
    /// { "errorCode": "ERR_...", "message": "...", "details": [ ... ] }
    /// ```
    #[must_use]
    pub fn response_body(&self) -> serde_json::Value {
        let mut details = Vec::new();

        if let Some(info) = &self.error_info {
            details.push(Detail::ErrorInfo(info));
        }
        if let Some(resource) = &self.resource_info {
            details.push(Detail::ResourceInfo(resource));
        }
        if let Some(violation) = &self.field_violation {
            details.push(Detail::BadRequest {
                field_violations: std::slice::from_ref(violation),
            });
        }
        if let Some(link) = &self.help_link {
            details.push(Detail::Help {
                links: std::slice::from_ref(link),
            });
        }

        serde_json::json!({
            "errorCode": self.tag,
            "message": self.message,
            "details": details,
        })
    }
}

#[derive(Serialize)]
#[serde(tag = "@type")]
enum Detail<'a> {
    #[serde(rename = "type.googleapis.com/google.rpc.ErrorInfo")]
    ErrorInfo(&'a ErrorInfo),
    #[serde(rename = "type.googleapis.com/google.rpc.ResourceInfo")]
    ResourceInfo(&'a ResourceInfo),
    #[serde(rename = "type.googleapis.com/google.rpc.BadRequest")]
    BadRequest {
        #[serde(rename = "fieldViolations")]
        field_violations: &'a [FieldViolation],
    },
    #[serde(rename = "type.googleapis.com/google.rpc.Help")]
    Help { links: &'a [HelpLink] },
}

/// Builder for [`ApiError`].
#[derive(Debug, Clone)]
#[must_use]
pub struct ApiErrorBuilder {
    error: ApiError,
}

impl ApiErrorBuilder {
    /// Start an error with its status codes, message and legacy tag.
    pub fn new(
        grpc_code: GrpcCode,
        http_status: StatusCode,
        message: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            error: ApiError {
                grpc_code,
                http_status,
                message: message.into(),
                tag: tag.into(),
                error_info: None,
                resource_info: None,
                field_violation: None,
                help_link: None,
            },
        }
    }

    /// Attach a machine readable reason and metadata.
    pub fn with_error_info(
        mut self,
        reason: impl Into<String>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        self.error.error_info = Some(ErrorInfo {
            reason: reason.into(),
            domain: ERROR_DOMAIN.to_string(),
            metadata,
        });
        self
    }

    /// Attach the resource the request targeted.
    pub fn with_resource_info(
        mut self,
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        owner: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.error.resource_info = Some(ResourceInfo {
            resource_type: resource_type.into(),
            resource_name: resource_name.into(),
            owner: owner.into(),
            description: description.into(),
        });
        self
    }

    /// Attach an invalid field.
    pub fn with_field_violation(
        mut self,
        field: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.error.field_violation = Some(FieldViolation {
            field: field.into(),
            description: description.into(),
        });
        self
    }

    /// Attach a documentation link.
    pub fn with_help_link(mut self, url: impl Into<String>, description: impl Into<String>) -> Self {
        self.error.help_link = Some(HelpLink {
            url: url.into(),
            description: description.into(),
        });
        self
    }

    /// Finish the error.
    #[must_use]
    pub fn build(self) -> ApiError {
        self.error
    }
}
