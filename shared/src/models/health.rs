//! Health report returned by `GET /health`

use serde::{Deserialize, Serialize};

pub const STATUS_HEALTHY: &str = "healthy";
pub const STATUS_DEGRADED: &str = "degraded";

/// Service health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// healthy | degraded
    pub status: String,
    pub version: String,
    pub environment: String,
    pub storage: StorageCheck,
    pub uptime_seconds: u64,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == STATUS_HEALTHY
    }
}

/// Result of probing the employee store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageCheck {
    /// memory | redb
    pub backend: String,
    /// ok | error
    pub status: String,
    pub latency_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StorageCheck {
    pub fn ok(backend: impl Into<String>, latency_ms: u64, employees: u64) -> Self {
        Self {
            backend: backend.into(),
            status: "ok".to_string(),
            latency_ms,
            employees: Some(employees),
            message: None,
        }
    }

    pub fn error(backend: impl Into<String>, latency_ms: u64, message: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            status: "error".to_string(),
            latency_ms,
            employees: None,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
