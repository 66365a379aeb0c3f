//! Employee Client - HTTP client for the employee API
//!
//! Typed access to `/employees` and `/health`. Mutations answer with an
//! [`EmployeeOutcome`]; a missing employee on update or delete is an outcome,
//! not an error.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeId, EmployeeOutcome, EmployeePayload, HealthReport};
