//! Shared types for the employee manager
//!
//! Wire models, error codes and response envelopes used by both the
//! server and the client crates.

pub mod error;
pub mod models;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Employee, EmployeeId, EmployeeOutcome, EmployeePayload, HealthReport};
