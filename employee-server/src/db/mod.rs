//! Database Module
//!
//! Chooses and opens the employee store backend.

pub mod repository;

use std::str::FromStr;
use std::sync::Arc;

pub use repository::{
    EmployeeStore, MemoryEmployeeStore, RedbEmployeeStore, RepoError, RepoResult,
};

use crate::core::{Config, ServerError};

/// File name of the redb database inside `work_dir/database`
pub const REDB_FILE_NAME: &str = "employees.redb";

/// Storage backend selected by `STORAGE_BACKEND`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    Memory,
    /// Embedded redb database file
    Redb,
}

impl FromStr for StorageBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "redb" => Ok(Self::Redb),
            other => Err(ServerError::Config(format!(
                "Unknown STORAGE_BACKEND '{}', expected 'memory' or 'redb'",
                other
            ))),
        }
    }
}

/// Open the employee store configured in `config`
///
/// The redb backend creates `work_dir/database` if it does not exist.
pub fn open_store(config: &Config) -> Result<Arc<dyn EmployeeStore>, ServerError> {
    match config.storage()? {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory employee store");
            Ok(Arc::new(MemoryEmployeeStore::new()))
        }
        StorageBackend::Redb => {
            let db_dir = config.database_dir();
            std::fs::create_dir_all(&db_dir)?;
            let db_path = db_dir.join(REDB_FILE_NAME);
            let store = RedbEmployeeStore::open(&db_path)?;
            tracing::info!(path = %db_path.display(), "Opened redb employee store");
            Ok(Arc::new(store))
        }
    }
}
