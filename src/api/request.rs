//! Request types for the payroll service API.
//!
//! The add-employee and add-role endpoints take [`NewEmployee`] and
//! [`NewRole`](crate::models::NewRole) bodies directly; this module adds the
//! salary lookup body and the conversion of JSON extraction failures.
//!
//! [`NewEmployee`]: crate::models::NewEmployee

use axum::{extract::rejection::JsonRejection, Json};
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// Request body for `GET /v1/employees/salary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRequest {
    /// The role whose compensation the salary is computed from.
    pub role_id: i32,
}

/// Unwraps a JSON body, turning any extraction failure into
/// [`ServiceError::InvalidBody`].
///
/// Data errors keep serde's wording, so a missing key is reported as
/// ``missing field `<key>` ``.
pub fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> ServiceResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let message = match rejection {
                JsonRejection::JsonDataError(err) => err.body_text(),
                JsonRejection::JsonSyntaxError(err) => {
                    format!("Invalid JSON syntax: {}", err.body_text())
                }
                JsonRejection::MissingJsonContentType(_) => {
                    "Content-Type must be application/json".to_string()
                }
                other => other.body_text(),
            };
            Err(ServiceError::InvalidBody { message })
        }
    }
}
