//! Response types for the payroll service API.
//!
//! This module defines the success and error bodies and how a
//! [`ServiceError`] becomes an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::config::ErrorPolicy;
use crate::error::{ErrorKind, ServiceError};

/// Confirmation body returned by the write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Creates a new confirmation body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// The failure's message.
    pub error: String,
    /// The failure's kind; only present under the classified policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorKind>,
}

/// A failure recorded on a response so the error middleware can log it
/// and render it according to the configured policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// The failure's kind.
    pub kind: ErrorKind,
    /// The failure's message.
    pub message: String,
}

impl From<&ServiceError> for ErrorReport {
    fn from(error: &ServiceError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl ErrorReport {
    /// Returns the status code this failure is answered with.
    pub fn status(&self, policy: ErrorPolicy) -> StatusCode {
        match policy {
            ErrorPolicy::Uniform => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorPolicy::Classified => match self.kind {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Storage | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Builds the response for this failure.
    pub fn render(&self, policy: ErrorPolicy) -> Response {
        let body = ApiError {
            error: self.message.clone(),
            code: match policy {
                ErrorPolicy::Uniform => None,
                ErrorPolicy::Classified => Some(self.kind),
            },
        };
        (self.status(policy), Json(body)).into_response()
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let report = ErrorReport::from(&self);
        let mut response = report.render(ErrorPolicy::Uniform);
        response.extensions_mut().insert(report);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(kind: ErrorKind) -> ErrorReport {
        ErrorReport {
            kind,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_api_error_serialization_omits_missing_code() {
        let error = ApiError {
            error: "Test message".to_string(),
            code: None,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, r#"{"error":"Test message"}"#);
    }

    #[test]
    fn test_api_error_serialization_with_code() {
        let error = ApiError {
            error: "No role found with id 3".to_string(),
            code: Some(ErrorKind::NotFound),
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"NOT_FOUND\""));
    }

    #[test]
    fn test_uniform_policy_is_always_500() {
        for kind in [
            ErrorKind::Validation,
            ErrorKind::NotFound,
            ErrorKind::Storage,
            ErrorKind::Internal,
        ] {
            assert_eq!(
                report(kind).status(ErrorPolicy::Uniform),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }

    #[test]
    fn test_classified_policy_distinguishes_kinds() {
        let policy = ErrorPolicy::Classified;
        assert_eq!(report(ErrorKind::Validation).status(policy), StatusCode::BAD_REQUEST);
        assert_eq!(report(ErrorKind::NotFound).status(policy), StatusCode::NOT_FOUND);
        assert_eq!(
            report(ErrorKind::Storage).status(policy),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_service_error_response_carries_report() {
        let response = ServiceError::RoleNotFound { role_id: 5 }.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let report = response.extensions().get::<ErrorReport>().unwrap();
        assert_eq!(report.kind, ErrorKind::NotFound);
        assert_eq!(report.message, "No role found with id 5");
    }

    #[test]
    fn test_message_response_serialization() {
        let json = serde_json::to_string(&MessageResponse::new("Role added successfully")).unwrap();
        assert_eq!(json, r#"{"message":"Role added successfully"}"#);
    }
}
