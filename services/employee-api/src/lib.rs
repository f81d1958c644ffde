//! Staffdesk employee API
//!
//! CRUD over the `employees` table plus `/`, `/health` and `/metrics`.

use axum::{extract::DefaultBodyLimit, Router};
use staffdesk_utils::ServerConfig;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod extract;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use middleware::request_id_middleware;

pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    routes::create_api_routes()
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.max_request_size)),
        )
        .with_state(state)
}
