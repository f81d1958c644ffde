//! In-process employee store.
//!
//! Mirrors the Postgres table: ids come from a monotonic counter and are
//! never handed out twice, and `email` is unique across live records.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use staffdesk_models::{Employee, EmployeeUpdate, NewEmployee};

use super::EmployeeStore;
use crate::error::{RepositoryError, RepositoryResult};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<i32, Employee>,
    last_id: i32,
}

impl Table {
    fn email_taken(&self, email: &str, except: Option<i32>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && Some(row.id) != except)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeRepository {
    async fn create(&self, new: NewEmployee) -> RepositoryResult<Employee> {
        let mut table = self.table.write().await;

        if table.email_taken(&new.email, None) {
            return Err(RepositoryError::DuplicateEmail { email: new.email });
        }

        table.last_id += 1;
        let employee = Employee::new(table.last_id, new);
        table.rows.insert(employee.id, employee.clone());

        Ok(employee)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: i32,
        changes: EmployeeUpdate,
    ) -> RepositoryResult<Option<Employee>> {
        let mut table = self.table.write().await;

        let Some(current) = table.rows.get(&id) else {
            return Ok(None);
        };

        if let Some(email) = changes.new_email() {
            if table.email_taken(email, Some(id)) {
                return Err(RepositoryError::DuplicateEmail {
                    email: email.to_string(),
                });
            }
        }

        let mut employee = current.clone();
        employee.apply(changes);
        table.rows.insert(id, employee.clone());

        Ok(Some(employee))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
