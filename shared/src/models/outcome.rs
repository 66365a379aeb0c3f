//! Outcome of employee mutations
//!
//! Create, update and delete answer with a confirmation text on the wire.
//! Inside the program they are a tagged value; the text is produced only
//! when the outcome is turned into a response.

use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};
use serde::{Deserialize, Serialize};

use super::EmployeeId;

pub const MSG_CREATED: &str = "Employee created successfully";
pub const MSG_UPDATED: &str = "Employee updated successfully";
pub const MSG_DELETED: &str = "Employee deleted successfully";
pub const MSG_NOT_FOUND: &str = "Employee not found";

/// Base path of the employee resource
pub const EMPLOYEES_PATH: &str = "/employees";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmployeeOutcome {
    Created { id: EmployeeId },
    Updated { id: EmployeeId },
    Deleted { id: EmployeeId },
    NotFound { id: EmployeeId },
}

impl EmployeeOutcome {
    /// Confirmation text sent to the caller
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created { .. } => MSG_CREATED,
            Self::Updated { .. } => MSG_UPDATED,
            Self::Deleted { .. } => MSG_DELETED,
            Self::NotFound { .. } => MSG_NOT_FOUND,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Created { .. } => StatusCode::CREATED,
            Self::Updated { .. } | Self::Deleted { .. } => StatusCode::OK,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn id(&self) -> EmployeeId {
        match self {
            Self::Created { id }
            | Self::Updated { id }
            | Self::Deleted { id }
            | Self::NotFound { id } => *id,
        }
    }

    /// Resource location of the affected employee
    pub fn location(&self) -> String {
        format!("{}/{}", EMPLOYEES_PATH, self.id())
    }
}

impl IntoResponse for EmployeeOutcome {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = self.message();

        match self {
            Self::Created { .. } => {
                (status, [(header::LOCATION, self.location())], body).into_response()
            }
            _ => (status, body).into_response(),
        }
    }
}
