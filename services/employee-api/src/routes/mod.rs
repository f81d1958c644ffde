use axum::{routing::get, Router};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .merge(employee_routes())
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees/", get(list_employees).post(create_employee))
        .route("/employees", get(list_employees).post(create_employee))
        .route(
            "/employees/:emp_id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}
