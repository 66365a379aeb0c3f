//! redb-based employee store

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use shared::models::{Employee, EmployeeId, EmployeePayload};

use super::{EmployeeStore, RepoError, RepoResult, not_found};

/// Employees table: key = employee id, value = JSON
const EMPLOYEES_TABLE: TableDefinition<i64, &[u8]> = TableDefinition::new("employees");

/// Metadata table: key = name, value = counter
const META_TABLE: TableDefinition<&str, i64> = TableDefinition::new("meta");

/// Next id to hand out; ids are never reused
const NEXT_ID_KEY: &str = "next_employee_id";

impl From<redb::DatabaseError> for RepoError {
    fn from(err: redb::DatabaseError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::TransactionError> for RepoError {
    fn from(err: redb::TransactionError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::TableError> for RepoError {
    fn from(err: redb::TableError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::StorageError> for RepoError {
    fn from(err: redb::StorageError) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<redb::CommitError> for RepoError {
    fn from(err: redb::CommitError) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Employee store persisted in a redb file
///
/// Every mutation runs in one write transaction, so id allocation and the
/// insert commit together.
#[derive(Clone)]
pub struct RedbEmployeeStore {
    db: Arc<Database>,
}

impl RedbEmployeeStore {
    /// Open or create database
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open in-memory database
    pub fn open_in_memory() -> RepoResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> RepoResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(EMPLOYEES_TABLE)?;
            let _ = write_txn.open_table(META_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn decode(bytes: &[u8]) -> RepoResult<Employee> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[async_trait]
impl EmployeeStore for RedbEmployeeStore {
    fn backend(&self) -> &'static str {
        "redb"
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EMPLOYEES_TABLE)?;

        let mut employees = Vec::new();
        for result in table.iter()? {
            let (_, guard) = result?;
            employees.push(Self::decode(guard.value())?);
        }
        Ok(employees)
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EMPLOYEES_TABLE)?;

        match table.get(id)? {
            Some(guard) => Ok(Some(Self::decode(guard.value())?)),
            None => Ok(None),
        }
    }

    async fn create(&self, data: EmployeePayload) -> RepoResult<Employee> {
        let txn = self.db.begin_write()?;
        let employee = {
            let mut meta = txn.open_table(META_TABLE)?;
            let id = meta.get(NEXT_ID_KEY)?.map(|g| g.value()).unwrap_or(1);
            meta.insert(NEXT_ID_KEY, id + 1)?;

            let employee = Employee::from_payload(id, data);
            let value = serde_json::to_vec(&employee)?;
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            table.insert(id, value.as_slice())?;
            employee
        };
        txn.commit()?;

        tracing::info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    async fn update(&self, id: EmployeeId, data: EmployeePayload) -> RepoResult<Employee> {
        let txn = self.db.begin_write()?;
        let employee = {
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;

            // Read first
            let mut employee = {
                let guard = table.get(id)?.ok_or_else(|| not_found(id))?;
                Self::decode(guard.value())?
            };

            employee.apply(data);
            let value = serde_json::to_vec(&employee)?;
            table.insert(id, value.as_slice())?;
            employee
        };
        txn.commit()?;

        tracing::info!(employee_id = id, "Employee updated");
        Ok(employee)
    }

    async fn delete(&self, id: EmployeeId) -> RepoResult<bool> {
        let txn = self.db.begin_write()?;
        let removed = {
            let mut table = txn.open_table(EMPLOYEES_TABLE)?;
            table.remove(id)?.is_some()
        };
        txn.commit()?;

        if removed {
            tracing::info!(employee_id = id, "Employee deleted");
        }
        Ok(removed)
    }

    async fn count(&self) -> RepoResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(EMPLOYEES_TABLE)?;
        Ok(table.len()?)
    }
}
