mod connection;
mod credentials;
mod database;
mod errors;
mod logging;
mod ping;
mod root;
mod routers;

pub use connection::ConnectionConfig;
pub use credentials::Credentials;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use ping::PingConfig;
pub use root::{CliOverrides, Config};
pub use routers::RouterConfig;
