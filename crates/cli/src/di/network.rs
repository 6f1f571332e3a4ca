use jping_domain::Config;
use jping_infrastructure::network::VendorConnector;
use std::sync::Arc;

pub struct NetworkServices {
    pub connector: Arc<VendorConnector>,
}

impl NetworkServices {
    pub fn new(config: &Config) -> Self {
        Self {
            connector: Arc::new(VendorConnector::from_config(&config.connection)),
        }
    }
}
