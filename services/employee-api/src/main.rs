use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use staffdesk_database::{
    initialize_database, EmployeeStore, InMemoryEmployeeRepository, PgEmployeeRepository,
};
use staffdesk_employee_api::{create_app, AppState};
use staffdesk_utils::{init_logging, AppConfig, StorageBackend};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        let mut config = AppConfig::default();
        config.apply_database_url(std::env::var(staffdesk_utils::DATABASE_URL_VAR).ok());
        config
    });

    init_logging(&config.logging)?;
    info!("Starting Staffdesk employee API");

    let store = build_store(&config).await?;
    let state = AppState::new(store)?;
    let app = create_app(state, &config.server);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Employee API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Employee API stopped");
    Ok(())
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn EmployeeStore>> {
    match config.database.backend {
        StorageBackend::Postgres => {
            let db_config = staffdesk_database::DatabaseConfig {
                postgres_url: config.database.url.clone(),
                max_connections: config.database.max_connections,
                connection_timeout: Duration::from_secs(
                    config.database.connection_timeout_seconds,
                ),
            };
            let pool = initialize_database(&db_config).await?;
            info!("Database connection established");
            Ok(Arc::new(PgEmployeeRepository::new(pool)))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; records are lost on shutdown");
            Ok(Arc::new(InMemoryEmployeeRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
