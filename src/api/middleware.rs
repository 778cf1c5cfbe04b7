//! Error-reporting middleware.
//!
//! One instance is attached to every route with the name of the operation
//! the route runs. It tags the request with a correlation id, and when the
//! handler fails it logs the failure once at ERROR and renders the
//! `{"error": ...}` body with the status code the configured policy picks.

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{error, info_span, Instrument};
use uuid::Uuid;

use crate::config::ErrorPolicy;

use super::response::ErrorReport;

/// Response header carrying the correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-route state of [`report_failures`].
#[derive(Debug, Clone, Copy)]
pub struct OperationGuard {
    operation: &'static str,
    policy: ErrorPolicy,
}

impl OperationGuard {
    /// Creates a guard for the named operation.
    pub fn new(operation: &'static str, policy: ErrorPolicy) -> Self {
        Self { operation, policy }
    }
}

/// Runs the handler inside a correlation span and converts any recorded
/// [`ErrorReport`] into the final error response.
pub async fn report_failures(
    State(guard): State<OperationGuard>,
    request: Request,
    next: Next,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        "request",
        operation = guard.operation,
        correlation_id = %correlation_id
    );

    let response = next.run(request).instrument(span).await;
    let (mut parts, body) = response.into_parts();

    let mut response = match parts.extensions.remove::<ErrorReport>() {
        Some(report) => {
            error!(
                correlation_id = %correlation_id,
                operation = guard.operation,
                kind = ?report.kind,
                "Error occurred while executing {}: {}",
                guard.operation,
                report.message
            );
            report.render(guard.policy)
        }
        None => Response::from_parts(parts, body),
    };

    if let Ok(value) = HeaderValue::from_str(&correlation_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
