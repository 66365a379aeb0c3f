//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an employee not found error carrying the requested id
    pub fn employee_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::EmployeeNotFound,
            format!("Employee {} not found", id),
        )
        .with_detail("id", id)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

/// JSON body of every error response
///
/// ```json
/// { "code": 8001, "message": "Employee 7 not found", "details": { "id": 7 } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Numeric [`ErrorCode`]
    pub code: u16,
    /// Human-readable message
    pub message: String,
    /// Additional error details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: err.code.code(),
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // System errors keep their cause in the log, not in the body
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
            let body = ApiResponse::error(&AppError::new(self.code));
            return (status, Json(body)).into_response();
        }

        let body = ApiResponse::error(&self);
        (status, Json(body)).into_response()
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use axum::extract::rejection::JsonRejection;

        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                Self::invalid_request("Expected request with `Content-Type: application/json`")
            }
            other => Self::validation(other.body_text()),
        }
    }
}

impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Missing required fields")
            .with_detail("field", "email")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "email");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_employee_not_found() {
        let err = AppError::employee_not_found(42);
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
        assert_eq!(err.message, "Employee 42 not found");
        assert_eq!(err.details.unwrap().get("id").unwrap(), 42);
        assert_eq!(
            AppError::employee_not_found(1).http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::database("redb commit failed");
        assert_eq!(format!("{}", err), "redb commit failed");
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::employee_not_found(3);
        let response = ApiResponse::error(&err);

        assert_eq!(response.code, 8001);
        assert_eq!(response.message, "Employee 3 not found");
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let json = serde_json::to_value(ApiResponse::error(&AppError::validation(
            "name must not be empty",
        )))
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": 2, "message": "name must not be empty" })
        );

        let json = serde_json::to_value(ApiResponse::error(&AppError::employee_not_found(7)))
            .unwrap();
        assert_eq!(json["code"], 8001);
        assert_eq!(json["details"]["id"], 7);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_api_response_deserialize_without_details() {
        let body: ApiResponse =
            serde_json::from_str(r#"{"code":9002,"message":"Database error"}"#).unwrap();
        assert_eq!(body.code, ErrorCode::DatabaseError.code());
        assert!(body.details.is_none());
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::validation("name must not be empty").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::database("disk on fire").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
