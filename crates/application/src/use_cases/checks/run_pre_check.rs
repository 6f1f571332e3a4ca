use super::session::release;
use super::settings::CheckSettings;
use crate::ports::{NetworkElement, NetworkElementConnector, PingRecordRepository};
use jping_domain::{DomainError, HostTarget, PingRecord, PreCheckSummary};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: capture the reachability baseline of one router
///
/// Pings every neighbor in the live ARP table and upserts the outcome.
pub struct RunPreCheckUseCase {
    connector: Arc<dyn NetworkElementConnector>,
    repo: Arc<dyn PingRecordRepository>,
    settings: CheckSettings,
}

impl RunPreCheckUseCase {
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

    pub async fn execute(&self, target: &HostTarget) -> Result<PreCheckSummary, DomainError> {
        let mut element = self
            .connector
            .connect(
                target,
                &self.settings.credentials,
                self.settings.connect_timeout,
            )
            .await?;

        let result = self.capture(target, element.as_mut()).await;
        release(element, result).await
    }

    async fn capture(
        &self,
        target: &HostTarget,
        element: &mut dyn NetworkElement,
    ) -> Result<PreCheckSummary, DomainError> {
        let entries = element.arp_table().await?;
        debug!(host = %target.hostname, entries = entries.len(), "ARP table read");

        let mut summary = PreCheckSummary::new(target.hostname.as_str());
        for entry in entries {
            let reachable = element
                .ping(&entry.ip_address, self.settings.ping_count)
                .await?;
            debug!(
                host = %target.hostname,
                ip = %entry.ip_address,
                interface = %entry.interface,
                reachable,
                "Neighbor pinged"
            );

            self.repo
                .upsert(&PingRecord::from_arp_entry(entry, reachable))
                .await?;
            summary.record(reachable);
        }

        info!(
            host = %target.hostname,
            entries = summary.entries,
            reachable = summary.reachable,
            "Baseline captured"
        );
        Ok(summary)
    }
}
