//! Repository Module
//!
//! The employee store contract and its backends.

pub mod memory;
pub mod redb_store;

pub use memory::MemoryEmployeeStore;
pub use redb_store::RedbEmployeeStore;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeId, EmployeePayload};
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupted record: {0}")]
    Corrupted(String),
}

impl From<serde_json::Error> for RepoError {
    fn from(err: serde_json::Error) -> Self {
        RepoError::Corrupted(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::EmployeeNotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Corrupted(msg) => AppError::with_message(ErrorCode::StorageCorrupted, msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee store contract
///
/// Ids are assigned by the store, start at 1 and are never reused.
/// Every operation is atomic with respect to the others.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Backend name, reported by the health check
    fn backend(&self) -> &'static str;

    /// All employees, ascending by id
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;

    /// Insert under a freshly assigned id
    async fn create(&self, data: EmployeePayload) -> RepoResult<Employee>;

    /// Replace the fields of an existing employee
    ///
    /// Fails with [`RepoError::NotFound`] if `id` does not exist.
    async fn update(&self, id: EmployeeId, data: EmployeePayload) -> RepoResult<Employee>;

    /// Remove an employee; `false` if `id` did not exist
    async fn delete(&self, id: EmployeeId) -> RepoResult<bool>;

    async fn count(&self) -> RepoResult<u64>;
}

pub(crate) fn not_found(id: EmployeeId) -> RepoError {
    RepoError::NotFound(format!("Employee {} not found", id))
}

/// Contract tests run against every backend
#[cfg(test)]
pub(crate) mod contract {
    use super::*;

    pub fn payload(name: &str) -> EmployeePayload {
        EmployeePayload {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    pub async fn create_then_read(store: &dyn EmployeeStore) {
        let created = store.create(payload("Alice")).await.unwrap();
        assert_eq!(created.id, 1);

        let found = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(found.matches(&payload("Alice")));
    }

    pub async fn ids_are_not_reused(store: &dyn EmployeeStore) {
        let a = store.create(payload("Alice")).await.unwrap();
        let b = store.create(payload("Bob")).await.unwrap();
        assert!(store.delete(b.id).await.unwrap());

        let c = store.create(payload("Carol")).await.unwrap();
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    }

    pub async fn list_after_deletes(store: &dyn EmployeeStore) {
        let mut ids = Vec::new();
        for name in ["Alice", "Bob", "Carol", "Dave", "Erin"] {
            ids.push(store.create(payload(name)).await.unwrap().id);
        }
        assert!(store.delete(ids[1]).await.unwrap());
        assert!(store.delete(ids[3]).await.unwrap());

        let all = store.find_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol", "Erin"]);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    pub async fn update_existing_and_missing(store: &dyn EmployeeStore) {
        let created = store.create(payload("Alice")).await.unwrap();

        let updated = store.update(created.id, payload("Alicia")).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Alicia");
        assert_eq!(
            store.find_by_id(created.id).await.unwrap().unwrap().name,
            "Alicia"
        );

        let err = store.update(404, payload("Ghost")).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    pub async fn delete_missing_is_noop(store: &dyn EmployeeStore) {
        store.create(payload("Alice")).await.unwrap();

        assert!(!store.delete(99).await.unwrap());
        assert_eq!(store.count().await.unwrap(), 1);

        assert!(store.delete(1).await.unwrap());
        assert!(store.find_by_id(1).await.unwrap().is_none());
        assert!(!store.delete(1).await.unwrap());
    }
}
