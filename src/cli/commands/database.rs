use anyhow::Context;
use serde_json::json;

use crate::cli::utils::{output_error, output_success};
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{seed::seed_sample_data, DatabaseManager};

async fn connect(config: &AppConfig) -> anyhow::Result<DatabaseManager> {
    let db = DatabaseManager::connect(&config.database)
        .await
        .with_context(|| format!("failed to connect to database {}", config.database.name))?;
    Ok(db)
}

pub async fn migrate(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let db = connect(config).await?;
    db.migrate().await.context("migration failed")?;
    db.close().await;

    output_success(
        output_format,
        &format!("Migrations applied to {}", config.database.name),
        None,
    )
}

pub async fn seed(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let db = connect(config).await?;
    let summary = seed_sample_data(db.pool()).await.context("seeding failed")?;
    db.close().await;

    output_success(
        output_format,
        &format!(
            "Seeded {} companies, {} industries, {} associations, {} invoices",
            summary.companies, summary.industries, summary.associations, summary.invoices
        ),
        Some(json!({ "seeded": summary })),
    )
}

pub async fn health(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let db = connect(config).await?;
    let result = db.health_check().await;
    db.close().await;

    match result {
        Ok(()) => output_success(
            output_format,
            &format!("Database {} is reachable", config.database.name),
            Some(json!({ "database": config.database.name })),
        ),
        Err(e) => {
            output_error(output_format, &format!("Database check failed: {}", e))?;
            anyhow::bail!("database {} is unhealthy", config.database.name)
        }
    }
}
