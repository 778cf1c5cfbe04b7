//! HTTP API module for the payroll service.
//!
//! This module provides the `/v1` REST endpoints for roles, employees and
//! salary calculation.

mod handlers;
mod middleware;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use middleware::{report_failures, OperationGuard, REQUEST_ID_HEADER};
pub use request::{parse_body, SalaryRequest};
pub use response::{ApiError, ErrorReport, MessageResponse};
pub use state::AppState;
