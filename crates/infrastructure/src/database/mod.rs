use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

pub const TABLE_NAME: &str = "jping";

const CREATE_SCHEMA: &str = "CREATE TABLE jping (
    ip_address TEXT NOT NULL,
    interface TEXT NOT NULL,
    hostname TEXT NOT NULL,
    ping_result INTEGER NOT NULL,
    UNIQUE(ip_address, hostname)
)";

/// Opens the result store, creating the file and table on first use.
///
/// `path` is a plain file path, never parsed as a URL. A single connection
/// keeps the store single-writer.
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    Ok(pool)
}

/// Creates the results table unless it already exists. Safe to call repeatedly.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let existing: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(TABLE_NAME)
            .fetch_optional(pool)
            .await?;

    if existing.is_some() {
        return Ok(false);
    }

    sqlx::query(CREATE_SCHEMA).execute(pool).await?;
    info!(table = TABLE_NAME, "Created results table");
    Ok(true)
}
