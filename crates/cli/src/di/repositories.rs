use jping_infrastructure::repositories::SqlitePingRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub ping_record: Arc<SqlitePingRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            ping_record: Arc::new(SqlitePingRecordRepository::new(pool)),
        }
    }
}
