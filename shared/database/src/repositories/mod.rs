//! Repository module for employee CRUD operations.
//!
//! [`EmployeeStore`] is the seam the HTTP layer talks to. The Postgres
//! repository is the production backend; the in-memory one carries the same
//! semantics for tests and local runs.

pub mod employee;
pub mod in_memory;

pub use employee::PgEmployeeRepository;
pub use in_memory::InMemoryEmployeeRepository;

use async_trait::async_trait;
use staffdesk_models::{Employee, EmployeeUpdate, NewEmployee};

use crate::error::RepositoryResult;

#[async_trait]
pub trait EmployeeStore: Send + Sync + 'static {
    /// Inserts a record and returns it with its assigned id.
    async fn create(&self, new: NewEmployee) -> RepositoryResult<Employee>;

    /// All records in insertion order.
    async fn find_all(&self) -> RepositoryResult<Vec<Employee>>;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>>;

    /// Merges `changes` into the record. `None` when `id` is unknown.
    async fn update(&self, id: i32, changes: EmployeeUpdate)
        -> RepositoryResult<Option<Employee>>;

    /// Hard delete. `false` when `id` is unknown.
    async fn delete(&self, id: i32) -> RepositoryResult<bool>;

    async fn health_check(&self) -> RepositoryResult<()>;
}
