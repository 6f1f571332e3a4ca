use jping_domain::{Config, Credentials};
use std::time::Duration;

/// Per-run values every host check needs.
#[derive(Debug, Clone)]
pub struct CheckSettings {
    pub credentials: Credentials,
    pub connect_timeout: Duration,
    pub ping_count: u32,
}

impl CheckSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            credentials: config.credentials.clone(),
            connect_timeout: config.connection.timeout(),
            ping_count: config.ping.count,
        }
    }
}
