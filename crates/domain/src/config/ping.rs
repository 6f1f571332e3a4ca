use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PingConfig {
    /// Echo requests sent per neighbor.
    #[serde(default = "default_count")]
    pub count: u32,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
        }
    }
}

fn default_count() -> u32 {
    5
}
