use super::session::release;
use super::settings::CheckSettings;
use crate::ports::{NetworkElement, NetworkElementConnector, PingRecordRepository};
use jping_domain::{ComparisonRow, DomainError, HostTarget};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case: re-ping a router's stored neighbors and compare with the baseline
///
/// Read-only with respect to the store.
pub struct RunPostCheckUseCase {
    connector: Arc<dyn NetworkElementConnector>,
    repo: Arc<dyn PingRecordRepository>,
    settings: CheckSettings,
}

impl RunPostCheckUseCase {
    pub fn new(
        connector: Arc<dyn NetworkElementConnector>,
        repo: Arc<dyn PingRecordRepository>,
        settings: CheckSettings,
    ) -> Self {
        Self {
            connector,
            repo,
            settings,
        }
    }

    pub async fn execute(&self, target: &HostTarget) -> Result<Vec<ComparisonRow>, DomainError> {
        let mut element = self
            .connector
            .connect(
                target,
                &self.settings.credentials,
                self.settings.connect_timeout,
            )
            .await?;

        let result = self.compare(target, element.as_mut()).await;
        release(element, result).await
    }

    async fn compare(
        &self,
        target: &HostTarget,
        element: &mut dyn NetworkElement,
    ) -> Result<Vec<ComparisonRow>, DomainError> {
        let records = self.repo.get_by_hostname(&target.hostname).await?;
        if records.is_empty() {
            warn!(host = %target.hostname, "No baseline stored for host");
            return Ok(Vec::new());
        }

        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let reachable = element
                .ping(&record.ip_address, self.settings.ping_count)
                .await?;
            debug!(
                host = %target.hostname,
                ip = %record.ip_address,
                before = record.ping_result,
                after = reachable,
                "Neighbor re-pinged"
            );
            rows.push(ComparisonRow::from_record(record, reachable));
        }

        let regressions = rows.iter().filter(|row| row.regressed()).count();
        info!(
            host = %target.hostname,
            neighbors = rows.len(),
            regressions,
            "Post-check complete"
        );
        Ok(rows)
    }
}
