//! In-memory employee store

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Employee, EmployeeId, EmployeePayload};

use super::{EmployeeStore, RepoResult, not_found};

#[derive(Debug)]
struct Inner {
    employees: BTreeMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

/// Employee store backed by a `BTreeMap`
///
/// Map and id counter share one lock, so id allocation and insert are a
/// single step.
#[derive(Debug)]
pub struct MemoryEmployeeStore {
    inner: RwLock<Inner>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                employees: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.inner.read().employees.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.inner.read().employees.get(&id).cloned())
    }

    async fn create(&self, data: EmployeePayload) -> RepoResult<Employee> {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let employee = Employee::from_payload(id, data);
        inner.employees.insert(id, employee.clone());
        tracing::info!(employee_id = id, "Employee created");
        Ok(employee)
    }

    async fn update(&self, id: EmployeeId, data: EmployeePayload) -> RepoResult<Employee> {
        let mut inner = self.inner.write();
        let employee = inner.employees.get_mut(&id).ok_or_else(|| not_found(id))?;
        employee.apply(data);
        tracing::info!(employee_id = id, "Employee updated");
        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> RepoResult<bool> {
        let removed = self.inner.write().employees.remove(&id).is_some();
        if removed {
            tracing::info!(employee_id = id, "Employee deleted");
        }
        Ok(removed)
    }

    async fn count(&self) -> RepoResult<u64> {
        Ok(self.inner.read().employees.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::contract;

    #[tokio::test]
    async fn test_create_then_read() {
        contract::create_then_read(&MemoryEmployeeStore::new()).await;
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        contract::ids_are_not_reused(&MemoryEmployeeStore::new()).await;
    }

    #[tokio::test]
    async fn test_list_after_deletes() {
        contract::list_after_deletes(&MemoryEmployeeStore::new()).await;
    }

    #[tokio::test]
    async fn test_update_existing_and_missing() {
        contract::update_existing_and_missing(&MemoryEmployeeStore::new()).await;
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        contract::delete_missing_is_noop(&MemoryEmployeeStore::new()).await;
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let store = std::sync::Arc::new(MemoryEmployeeStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(contract::payload(&format!("Worker{}", i)))
                    .await
                    .unwrap()
                    .id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
    }
}
