use super::cisco_ios::CiscoIosElement;
use super::juniper::JuniperElement;
use async_trait::async_trait;
use jping_application::ports::{NetworkElement, NetworkElementConnector};
use jping_domain::config::ConnectionConfig;
use jping_domain::{Credentials, DomainError, HostTarget, Vendor};
use std::time::Duration;
use tracing::info;

/// Opens the right kind of session for each target's vendor.
pub struct VendorConnector {
    ssh_port: u16,
    netconf_port: u16,
}

impl VendorConnector {
    pub fn new(ssh_port: u16, netconf_port: u16) -> Self {
        Self {
            ssh_port,
            netconf_port,
        }
    }

    pub fn from_config(config: &ConnectionConfig) -> Self {
        Self::new(config.ssh_port, config.netconf_port)
    }
}

#[async_trait]
impl NetworkElementConnector for VendorConnector {
    async fn connect(
        &self,
        target: &HostTarget,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Box<dyn NetworkElement>, DomainError> {
        info!(host = %target.hostname, vendor = %target.vendor, "Connecting");

        let element: Box<dyn NetworkElement> = match target.vendor {
            Vendor::Juniper => Box::new(
                JuniperElement::connect(&target.hostname, self.netconf_port, credentials, timeout)
                    .await?,
            ),
            Vendor::CiscoIos => Box::new(CiscoIosElement::connect(
                &target.hostname,
                self.ssh_port,
                credentials,
                timeout,
            )),
        };

        Ok(element)
    }
}
