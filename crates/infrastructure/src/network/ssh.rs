use async_trait::async_trait;
use jping_domain::{Credentials, DomainError};
use russh::client::{self, Handle, Msg};
use russh::{Channel, ChannelMsg, Disconnect};
use russh_keys::key::PublicKey;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

struct ClientHandler {
    host: String,
}

#[async_trait]
impl client::Handler for ClientHandler {
    type Error = russh::Error;

    // Host keys are not pinned; operators run this against their own routers.
    async fn check_server_key(
        &mut self,
        server_public_key: &PublicKey,
    ) -> Result<bool, Self::Error> {
        debug!(
            host = %self.host,
            fingerprint = %server_public_key.fingerprint(),
            "Accepting server host key"
        );
        Ok(true)
    }
}

/// An authenticated SSH connection to one device.
pub struct SshSession {
    host: String,
    handle: Handle<ClientHandler>,
}

impl SshSession {
    /// Connects and authenticates with a password, bounded by `timeout`.
    pub async fn connect(
        host: &str,
        port: u16,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let timed_out = || DomainError::ConnectTimeout {
            host: host.to_string(),
            timeout_secs: timeout.as_secs(),
        };

        let config = Arc::new(client::Config::default());
        let handler = ClientHandler {
            host: host.to_string(),
        };

        debug!(host, port, user = %credentials.user, "Opening SSH connection");
        let mut handle = tokio::time::timeout(timeout, client::connect(config, (host, port), handler))
            .await
            .map_err(|_| timed_out())?
            .map_err(|e| DomainError::ConnectionFailed {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        let authenticated = tokio::time::timeout(
            timeout,
            handle.authenticate_password(credentials.user.clone(), credentials.password.clone()),
        )
        .await
        .map_err(|_| timed_out())?
        .map_err(|e| DomainError::ConnectionFailed {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

        if !authenticated {
            return Err(DomainError::AuthenticationFailed {
                host: host.to_string(),
                user: credentials.user.clone(),
            });
        }

        Ok(Self {
            host: host.to_string(),
            handle,
        })
    }

    /// Runs one command on a fresh exec channel and returns its stdout.
    pub async fn exec(&self, command: &str) -> Result<String, DomainError> {
        let mut channel = self
            .handle
            .channel_open_session()
            .await
            .map_err(|e| DomainError::transport(&self.host, e))?;
        channel
            .exec(true, command)
            .await
            .map_err(|e| DomainError::transport(&self.host, e))?;

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let mut exit_status = None;
        while let Some(msg) = channel.wait().await {
            match msg {
                ChannelMsg::Data { ref data } => stdout.extend_from_slice(data),
                ChannelMsg::ExtendedData { ref data, .. } => stderr.extend_from_slice(data),
                ChannelMsg::ExitStatus { exit_status: status } => {
                    debug!(host = %self.host, command, exit_status = status, "Remote command exited");
                    exit_status = Some(status);
                }
                ChannelMsg::Failure => {
                    return Err(DomainError::transport(
                        &self.host,
                        format!("exec request for '{}' was rejected", command),
                    ));
                }
                _ => {}
            }
        }

        command_output(&self.host, command, exit_status, &stdout, &stderr)
    }

    /// Opens a channel bound to an SSH subsystem such as `netconf`.
    pub async fn open_subsystem(&self, name: &str) -> Result<Channel<Msg>, DomainError> {
        let channel = self
            .handle
            .channel_open_session()
            .await
            .map_err(|e| DomainError::transport(&self.host, e))?;
        channel
            .request_subsystem(true, name)
            .await
            .map_err(|e| DomainError::transport(&self.host, e))?;
        Ok(channel)
    }

    pub async fn close(&self) -> Result<(), DomainError> {
        self.handle
            .disconnect(Disconnect::ByApplication, "", "en")
            .await
            .map_err(|e| DomainError::transport(&self.host, e))
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

/// Turns what an exec channel produced into the command's stdout.
///
/// A non-zero exit status is a transport error carrying stderr.
fn command_output(
    host: &str,
    command: &str,
    exit_status: Option<u32>,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<String, DomainError> {
    match exit_status {
        Some(status) if status != 0 => {
            let stderr = String::from_utf8_lossy(stderr);
            Err(DomainError::transport(
                host,
                format!(
                    "'{}' exited with status {}: {}",
                    command,
                    status,
                    stderr.trim()
                ),
            ))
        }
        _ => Ok(String::from_utf8_lossy(stdout).into_owned()),
    }
}
