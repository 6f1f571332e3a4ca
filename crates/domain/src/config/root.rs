use serde::{Deserialize, Serialize};

use super::connection::ConnectionConfig;
use super::credentials::Credentials;
use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::ping::PingConfig;
use super::routers::RouterConfig;
use crate::vendor::HostTarget;

const LOCAL_CONFIG: &str = "jping.toml";
const SYSTEM_CONFIG: &str = "/etc/jping/config.toml";
const PASSWORD_ENV: &str = "JPING_PASSWORD";

/// Main configuration structure for jping
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Login shared by every router
    #[serde(default)]
    pub credentials: Credentials,

    /// Routers to check, processed in this order
    #[serde(default)]
    pub routers: Vec<RouterConfig>,

    #[serde(default)]
    pub ping: PingConfig,

    #[serde(default)]
    pub connection: ConnectionConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. jping.toml in current directory
    /// 3. /etc/jping/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        if let Ok(password) = std::env::var(PASSWORD_ENV) {
            config.credentials.password = password;
        }
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(user) = overrides.user {
            self.credentials.user = user;
        }
        if let Some(count) = overrides.ping_count {
            self.ping.count = count;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.routers.is_empty() {
            return Err(ConfigError::Validation("No routers configured".to_string()));
        }

        if self.credentials.user.trim().is_empty() {
            return Err(ConfigError::Validation("No user configured".to_string()));
        }

        if self.ping.count == 0 {
            return Err(ConfigError::Validation(
                "Ping count must be at least 1".to_string(),
            ));
        }

        for router in &self.routers {
            if router.hostname.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Router with empty hostname".to_string(),
                ));
            }
        }

        self.targets().map(|_| ())
    }

    /// Resolve every configured router into a typed target.
    ///
    /// Fails on the first unsupported vendor, before any device is contacted.
    pub fn targets(&self) -> Result<Vec<HostTarget>, ConfigError> {
        self.routers
            .iter()
            .map(|router| {
                HostTarget::parse(&router.hostname, &router.vendor).map_err(|_| {
                    ConfigError::UnsupportedVendor {
                        hostname: router.hostname.clone(),
                        vendor: router.vendor.clone(),
                    }
                })
            })
            .collect()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG).exists() {
            Some(LOCAL_CONFIG.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Some(SYSTEM_CONFIG.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub user: Option<String>,
    pub ping_count: Option<u32>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
