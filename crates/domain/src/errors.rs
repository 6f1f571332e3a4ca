use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Connection to {host} failed: {reason}")]
    ConnectionFailed { host: String, reason: String },

    #[error("Connection to {host} timed out after {timeout_secs}s")]
    ConnectTimeout { host: String, timeout_secs: u64 },

    #[error("Authentication failed for {user}@{host}")]
    AuthenticationFailed { host: String, user: String },

    #[error("Transport error on {host}: {reason}")]
    Transport { host: String, reason: String },

    #[error("Could not interpret response from {host}: {reason}")]
    ParseFailure { host: String, reason: String },

    #[error("RPC error from {host}: {message}")]
    RpcError { host: String, message: String },

    #[error("Session to {0} is not open")]
    NotConnected(String),

    #[error("Unsupported vendor: {0}")]
    UnsupportedVendor(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// True for failures that happen while establishing the session.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DomainError::ConnectionFailed { .. }
                | DomainError::ConnectTimeout { .. }
                | DomainError::AuthenticationFailed { .. }
        )
    }

    pub fn is_parse_failure(&self) -> bool {
        matches!(self, DomainError::ParseFailure { .. })
    }

    pub fn parse_failure(host: &str, reason: impl Into<String>) -> Self {
        DomainError::ParseFailure {
            host: host.to_string(),
            reason: reason.into(),
        }
    }

    pub fn transport(host: &str, reason: impl ToString) -> Self {
        DomainError::Transport {
            host: host.to_string(),
            reason: reason.to_string(),
        }
    }
}
