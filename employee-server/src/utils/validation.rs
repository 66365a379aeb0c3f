//! Input validation helpers
//!
//! Text length limits and payload checks run before anything reaches the
//! store.

use shared::models::EmployeePayload;
use validator::ValidateEmail;

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Person names
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone numbers and the like
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({len} chars, max {max_len})"
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate the body of a create or update request.
pub fn validate_employee(payload: &EmployeePayload) -> Result<(), AppError> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    if !payload.email.validate_email() {
        return Err(AppError::with_message(
            ErrorCode::EmployeeInvalidEmail,
            format!("'{}' is not a valid email address", payload.email),
        )
        .with_detail("field", "email"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EmployeePayload {
        EmployeePayload {
            name: "Alice".to_string(),
            phone: "+34 600 000 000".to_string(),
            email: "alice@example.com".to_string(),
        }
    }

    #[test]
    fn test_valid_payload() {
        assert!(validate_employee(&payload()).is_ok());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut p = payload();
        p.name = "   ".to_string();
        let err = validate_employee(&p).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "name");
    }

    #[test]
    fn test_too_long_phone_is_rejected() {
        let mut p = payload();
        p.phone = "1".repeat(MAX_SHORT_TEXT_LEN + 1);
        let err = validate_employee(&p).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "phone");
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let mut p = payload();
        p.email = "not-an-email".to_string();
        let err = validate_employee(&p).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeInvalidEmail);
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let name = "é".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&name, "name", MAX_NAME_LEN).is_ok());
    }
}
