use async_trait::async_trait;
use jping_domain::{ArpEntry, Credentials, DomainError, HostTarget};
use std::time::Duration;

/// An open session to one router.
///
/// Implementations own their transport exclusively. `disconnect` must be
/// idempotent and safe to call after any failure.
#[async_trait]
pub trait NetworkElement: Send {
    fn hostname(&self) -> &str;

    /// Neighbors currently in the router's ARP table.
    async fn arp_table(&mut self) -> Result<Vec<ArpEntry>, DomainError>;

    /// Pings `target_ip` from the router.
    ///
    /// An unreachable target is `Ok(false)`. Errors are reserved for transport
    /// failures and replies that could not be interpreted at all.
    async fn ping(&mut self, target_ip: &str, count: u32) -> Result<bool, DomainError>;

    async fn disconnect(&mut self) -> Result<(), DomainError>;
}

#[async_trait]
pub trait NetworkElementConnector: Send + Sync {
    async fn connect(
        &self,
        target: &HostTarget,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Box<dyn NetworkElement>, DomainError>;
}
