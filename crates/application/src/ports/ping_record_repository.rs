use async_trait::async_trait;
use jping_domain::{DomainError, PingRecord};

#[async_trait]
pub trait PingRecordRepository: Send + Sync {
    /// Insert the record, replacing any existing one with the same
    /// (hostname, ip_address) in a single atomic write.
    async fn upsert(&self, record: &PingRecord) -> Result<(), DomainError>;

    /// All stored records for a router, in the order they were first stored.
    async fn get_by_hostname(&self, hostname: &str) -> Result<Vec<PingRecord>, DomainError>;
}
