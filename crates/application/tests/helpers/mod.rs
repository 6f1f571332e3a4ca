#![allow(dead_code)]

mod mock_network;
mod mock_repositories;

pub use mock_network::{MockConnector, MockDevice};
pub use mock_repositories::MockPingRecordRepository;

use jping_application::use_cases::CheckSettings;
use jping_domain::{Credentials, HostTarget, Vendor};
use std::time::Duration;

pub fn settings() -> CheckSettings {
    CheckSettings {
        credentials: Credentials::new("netops", "secret"),
        connect_timeout: Duration::from_secs(5),
        ping_count: 5,
    }
}

pub fn juniper(hostname: &str) -> HostTarget {
    HostTarget::new(hostname, Vendor::Juniper)
}

pub fn cisco(hostname: &str) -> HostTarget {
    HostTarget::new(hostname, Vendor::CiscoIos)
}
