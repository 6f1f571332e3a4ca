use jping_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(path: &str) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", path);

    let pool = create_pool(path).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!("Database initialized successfully");
    Ok(pool)
}
