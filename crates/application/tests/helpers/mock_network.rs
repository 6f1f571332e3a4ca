use async_trait::async_trait;
use jping_application::ports::{NetworkElement, NetworkElementConnector};
use jping_domain::{ArpEntry, Credentials, DomainError, HostTarget};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Scripted behavior of one fake router.
#[derive(Clone, Default)]
pub struct MockDevice {
    arp: Vec<(String, String)>,
    pings: HashMap<String, Result<bool, DomainError>>,
    arp_error: Option<DomainError>,
    connect_error: Option<DomainError>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_neighbor(mut self, ip: &str, interface: &str, reachable: bool) -> Self {
        self.arp.push((ip.to_string(), interface.to_string()));
        self.pings.insert(ip.to_string(), Ok(reachable));
        self
    }

    pub fn with_ping(mut self, ip: &str, result: Result<bool, DomainError>) -> Self {
        self.pings.insert(ip.to_string(), result);
        self
    }

    pub fn with_arp_error(mut self, error: DomainError) -> Self {
        self.arp_error = Some(error);
        self
    }

    pub fn unreachable(mut self, error: DomainError) -> Self {
        self.connect_error = Some(error);
        self
    }
}

/// Hands out mock sessions and records every call made against them.
#[derive(Clone, Default)]
pub struct MockConnector {
    devices: Arc<Mutex<HashMap<String, MockDevice>>>,
    events: Arc<Mutex<Vec<String>>>,
}

impl MockConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_device(self, hostname: &str, device: MockDevice) -> Self {
        self.set_device(hostname, device);
        self
    }

    pub fn set_device(&self, hostname: &str, device: MockDevice) {
        self.devices
            .lock()
            .unwrap()
            .insert(hostname.to_string(), device);
    }

    pub fn set_ping(&self, hostname: &str, ip: &str, result: Result<bool, DomainError>) {
        if let Some(device) = self.devices.lock().unwrap().get_mut(hostname) {
            device.pings.insert(ip.to_string(), result);
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    pub fn clear_events(&self) {
        self.events.lock().unwrap().clear();
    }

    fn log(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl NetworkElementConnector for MockConnector {
    async fn connect(
        &self,
        target: &HostTarget,
        _credentials: &Credentials,
        _timeout: Duration,
    ) -> Result<Box<dyn NetworkElement>, DomainError> {
        self.log(format!("connect:{}", target.hostname));

        let device = self
            .devices
            .lock()
            .unwrap()
            .get(&target.hostname)
            .cloned()
            .ok_or_else(|| DomainError::ConnectionFailed {
                host: target.hostname.clone(),
                reason: "no route to host".to_string(),
            })?;

        if let Some(error) = device.connect_error.clone() {
            return Err(error);
        }

        Ok(Box::new(MockNetworkElement {
            hostname: target.hostname.clone(),
            device,
            connector: self.clone(),
            open: true,
        }))
    }
}

struct MockNetworkElement {
    hostname: String,
    device: MockDevice,
    connector: MockConnector,
    open: bool,
}

#[async_trait]
impl NetworkElement for MockNetworkElement {
    fn hostname(&self) -> &str {
        &self.hostname
    }

    async fn arp_table(&mut self) -> Result<Vec<ArpEntry>, DomainError> {
        self.connector.log(format!("arp:{}", self.hostname));
        if let Some(error) = self.device.arp_error.clone() {
            return Err(error);
        }
        Ok(self
            .device
            .arp
            .iter()
            .map(|(ip, interface)| ArpEntry::new(ip, interface, &self.hostname))
            .collect())
    }

    async fn ping(&mut self, target_ip: &str, _count: u32) -> Result<bool, DomainError> {
        self.connector
            .log(format!("ping:{}:{}", self.hostname, target_ip));
        self.device
            .pings
            .get(target_ip)
            .cloned()
            .unwrap_or(Ok(false))
    }

    async fn disconnect(&mut self) -> Result<(), DomainError> {
        if self.open {
            self.open = false;
            self.connector.log(format!("disconnect:{}", self.hostname));
        }
        Ok(())
    }
}
