//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee ID type
pub type EmployeeId = i64;

/// Employee record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Create / update employee payload
///
/// Carries only the descriptive fields. An `id` sent by the caller is
/// ignored: the store assigns ids on create and the path decides on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Employee {
    /// Build a stored record from a payload and its assigned id
    pub fn from_payload(id: EmployeeId, payload: EmployeePayload) -> Self {
        Self {
            id,
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
        }
    }

    /// Overwrite the descriptive fields, keeping the id
    pub fn apply(&mut self, payload: EmployeePayload) {
        self.name = payload.name;
        self.phone = payload.phone;
        self.email = payload.email;
    }

    /// Whether the descriptive fields equal the given payload
    pub fn matches(&self, payload: &EmployeePayload) -> bool {
        self.name == payload.name && self.phone == payload.phone && self.email == payload.email
    }
}
