use anyhow::{Context, Result};
use sqlx::PgPool;

pub async fn run_postgres_migrations(pool: &PgPool) -> Result<()> {
    tracing::info!("Running PostgreSQL migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            department VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create employees table")?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_employees_name ON employees(name)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_employees_department ON employees(department)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations completed successfully");
    Ok(())
}
