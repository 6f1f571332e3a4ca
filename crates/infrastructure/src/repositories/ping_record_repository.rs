use super::ping_record_row_mapper::{
    row_to_record, PingRecordRow, PING_RECORD_SELECT_BY_HOSTNAME, PING_RECORD_UPSERT,
};
use async_trait::async_trait;
use jping_application::ports::PingRecordRepository;
use jping_domain::{DomainError, PingRecord};
use sqlx::SqlitePool;
use tracing::{error, instrument};

pub struct SqlitePingRecordRepository {
    pool: SqlitePool,
}

impl SqlitePingRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PingRecordRepository for SqlitePingRecordRepository {
    #[instrument(skip(self))]
    async fn upsert(&self, record: &PingRecord) -> Result<(), DomainError> {
        sqlx::query(PING_RECORD_UPSERT)
            .bind(&record.ip_address)
            .bind(&record.interface)
            .bind(&record.hostname)
            .bind(record.ping_result as i64)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, ip = %record.ip_address, "Failed to upsert ping record");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_by_hostname(&self, hostname: &str) -> Result<Vec<PingRecord>, DomainError> {
        let rows = sqlx::query_as::<_, PingRecordRow>(PING_RECORD_SELECT_BY_HOSTNAME)
            .bind(hostname)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch ping records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(row_to_record).collect())
    }
}
