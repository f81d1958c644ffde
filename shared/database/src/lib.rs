pub mod error;
pub mod migrations;
pub mod postgres;
pub mod repositories;

pub use error::{RepositoryError, RepositoryResult};
pub use postgres::{create_postgres_pool, PostgresPool};
pub use repositories::*;

use anyhow::Result;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub postgres_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
}

/// Connects to PostgreSQL and makes sure the `employees` table exists.
pub async fn initialize_database(config: &DatabaseConfig) -> Result<PostgresPool> {
    let pool = create_postgres_pool(
        &config.postgres_url,
        config.max_connections,
        config.connection_timeout,
    )
    .await?;

    migrations::run_postgres_migrations(&pool).await?;

    Ok(pool)
}
