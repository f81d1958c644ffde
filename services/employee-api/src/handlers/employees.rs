//! Employee CRUD handlers.
//!
//! Each handler makes exactly one store call; the store borrows a pooled
//! connection for that call and returns it on every exit path.
//!
//! Extractors are taken as `Result`s so that rejected requests are counted
//! under their operation like any other outcome.

use std::future::Future;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use staffdesk_models::{Employee, EmployeeUpdate, NewEmployee};

use crate::error::ApiError;
use crate::extract::{Path, ValidatedJson};
use crate::AppState;

pub const EMPLOYEE_DELETED: &str = "Employee deleted successfully";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Ids outside the `SERIAL` range were never assigned.
fn stored_id(emp_id: i64) -> Result<i32, ApiError> {
    i32::try_from(emp_id).map_err(|_| ApiError::employee_not_found())
}

/// Runs a store operation and counts its outcome.
async fn observed<T, F>(
    state: &AppState,
    operation: &'static str,
    work: F,
) -> Result<Json<T>, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let result = work.await;
    state.metrics.record(operation, &result);

    if let Err(error) = &result {
        tracing::debug!(operation, code = error.code(), "Employee operation rejected");
    }

    result.map(Json)
}

/// POST /employees/
pub async fn create_employee(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<NewEmployee>, ApiError>,
) -> Result<Json<Employee>, ApiError> {
    observed(&state, "create", async {
        let ValidatedJson(payload) = payload?;
        let employee = state.store.create(payload).await?;
        tracing::info!(id = employee.id, "Employee created");
        Ok::<_, ApiError>(employee)
    })
    .await
}

/// GET /employees/
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    observed(&state, "list", async {
        state.store.find_all().await.map_err(ApiError::from)
    })
    .await
}

/// GET /employees/:emp_id
pub async fn get_employee(
    State(state): State<AppState>,
    emp_id: Result<Path<i64>, ApiError>,
) -> Result<Json<Employee>, ApiError> {
    observed(&state, "get", async {
        let Path(emp_id) = emp_id?;
        state
            .store
            .find_by_id(stored_id(emp_id)?)
            .await?
            .ok_or_else(ApiError::employee_not_found)
    })
    .await
}

/// PUT /employees/:emp_id
pub async fn update_employee(
    State(state): State<AppState>,
    emp_id: Result<Path<i64>, ApiError>,
    changes: Result<ValidatedJson<EmployeeUpdate>, ApiError>,
) -> Result<Json<Employee>, ApiError> {
    observed(&state, "update", async {
        let Path(emp_id) = emp_id?;
        let ValidatedJson(changes) = changes?;
        let employee = state
            .store
            .update(stored_id(emp_id)?, changes)
            .await?
            .ok_or_else(ApiError::employee_not_found)?;
        tracing::info!(id = employee.id, "Employee updated");
        Ok::<_, ApiError>(employee)
    })
    .await
}

/// DELETE /employees/:emp_id
pub async fn delete_employee(
    State(state): State<AppState>,
    emp_id: Result<Path<i64>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    observed(&state, "delete", async {
        let Path(emp_id) = emp_id?;
        if !state.store.delete(stored_id(emp_id)?).await? {
            return Err(ApiError::employee_not_found());
        }
        tracing::info!(id = emp_id, "Employee deleted");
        Ok(MessageResponse::new(EMPLOYEE_DELETED))
    })
    .await
}
