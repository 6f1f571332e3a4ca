use async_trait::async_trait;
use jping_application::ports::PingRecordRepository;
use jping_domain::{DomainError, PingRecord};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockPingRecordRepository {
    records: Arc<RwLock<Vec<PingRecord>>>,
    should_fail: Arc<RwLock<bool>>,
    writes: Arc<RwLock<usize>>,
}

impl MockPingRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            should_fail: Arc::new(RwLock::new(false)),
            writes: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn with_records(records: Vec<PingRecord>) -> Self {
        let repo = Self::new();
        *repo.records.write().await = records;
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn snapshot(&self) -> Vec<PingRecord> {
        self.records.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn write_count(&self) -> usize {
        *self.writes.read().await
    }
}

impl Default for MockPingRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PingRecordRepository for MockPingRecordRepository {
    async fn upsert(&self, record: &PingRecord) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        *self.writes.write().await += 1;

        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.key() == record.key()) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        Ok(())
    }

    async fn get_by_hostname(&self, hostname: &str) -> Result<Vec<PingRecord>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.hostname == hostname)
            .cloned()
            .collect())
    }
}
