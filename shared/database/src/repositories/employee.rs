//! Employee Repository
//!
//! CRUD operations for employee records.
//! Uses runtime SQL queries (unchecked) to avoid requiring DATABASE_URL at compile time.

use async_trait::async_trait;
use sqlx::PgPool;

use staffdesk_models::{Employee, EmployeeUpdate, NewEmployee};

use super::EmployeeStore;
use crate::error::{RepositoryError, RepositoryResult};

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeRepository {
    async fn create(&self, new: NewEmployee) -> RepositoryResult<Employee> {
        let employee: Employee = sqlx::query_as(
            r#"
            INSERT INTO employees (name, email, department)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, department
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.department)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::from_write(e, &new.email))?;

        tracing::debug!(id = employee.id, "Created employee");
        Ok(employee)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        let employees = sqlx::query_as(
            r#"
            SELECT id, name, email, department
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>> {
        let employee = sqlx::query_as(
            r#"
            SELECT id, name, email, department
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn update(
        &self,
        id: i32,
        changes: EmployeeUpdate,
    ) -> RepositoryResult<Option<Employee>> {
        // Dropping `tx` on an early return rolls it back.
        let mut tx = self.pool.begin().await?;

        let current: Option<Employee> = sqlx::query_as(
            r#"
            SELECT id, name, email, department
            FROM employees
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut employee) = current else {
            return Ok(None);
        };

        if changes.is_empty() {
            tx.commit().await?;
            return Ok(Some(employee));
        }

        employee.apply(changes);

        let updated: Employee = sqlx::query_as(
            r#"
            UPDATE employees SET
                name = $2,
                email = $3,
                department = $4
            WHERE id = $1
            RETURNING id, name, email, department
            "#,
        )
        .bind(employee.id)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.department)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::from_write(e, &employee.email))?;

        tx.commit().await?;

        tracing::debug!(id, "Updated employee");
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> RepositoryResult<()> {
        crate::postgres::health_check(&self.pool).await?;
        Ok(())
    }
}
