use sqlx::{mysql::MySqlPoolOptions, MySqlPool};

use crate::config::DatabaseConfig;

pub async fn create_pool(config: &DatabaseConfig) -> anyhow::Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    Ok(pool)
}

/// Bootstrap the offers table. Idempotent, runs at startup.
pub async fn init_db(pool: &MySqlPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS offers (
            id CHAR(36) PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            price DOUBLE NOT NULL,
            offer_price DOUBLE NOT NULL,
            start_offer DATE,
            end_offer DATE,
            currency VARCHAR(16),
            description TEXT,
            INDEX idx_offer_window (start_offer, end_offer)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
