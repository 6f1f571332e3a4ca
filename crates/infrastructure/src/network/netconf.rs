use super::ssh::SshSession;
use jping_domain::{Credentials, DomainError};
use russh::client::Msg;
use russh::{Channel, ChannelMsg};
use std::time::Duration;
use tracing::{debug, warn};

/// NETCONF 1.0 end-of-message marker.
pub const END_OF_MESSAGE: &str = "]]>]]>";

const RPC_ERROR_CLOSE: &str = "</rpc-error>";

const CLIENT_HELLO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<hello xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">
  <capabilities>
    <capability>urn:ietf:params:netconf:base:1.0</capability>
  </capabilities>
</hello>
]]>]]>"#;

/// What an `rpc-reply` carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcReply {
    /// Text content of the reply with XML entities decoded.
    Data(String),
    /// The `error-message` of an `rpc-error`.
    Error(String),
}

/// A NETCONF session running over an SSH `netconf` subsystem channel.
pub struct NetconfSession {
    ssh: SshSession,
    channel: Channel<Msg>,
    buffer: Vec<u8>,
    message_id: u64,
}

impl NetconfSession {
    pub async fn open(
        host: &str,
        port: u16,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let ssh = SshSession::connect(host, port, credentials, timeout).await?;
        let channel = match ssh.open_subsystem("netconf").await {
            Ok(channel) => channel,
            Err(e) => {
                if let Err(close_err) = ssh.close().await {
                    warn!(host, error = %close_err, "SSH close failed");
                }
                return Err(e);
            }
        };

        let mut session = Self {
            ssh,
            channel,
            buffer: Vec::new(),
            message_id: 0,
        };

        if let Err(e) = session.handshake(timeout).await {
            if let Err(close_err) = session.ssh.close().await {
                warn!(host, error = %close_err, "SSH close failed");
            }
            return Err(e);
        }

        debug!(host, "NETCONF session established");
        Ok(session)
    }

    async fn handshake(&mut self, timeout: Duration) -> Result<(), DomainError> {
        let hello = tokio::time::timeout(timeout, self.read_message())
            .await
            .map_err(|_| DomainError::ConnectTimeout {
                host: self.host().to_string(),
                timeout_secs: timeout.as_secs(),
            })??;

        if !hello.contains("<hello") {
            return Err(DomainError::parse_failure(
                self.host(),
                "server did not open with a NETCONF hello",
            ));
        }

        self.send(CLIENT_HELLO).await
    }

    /// Sends one RPC and waits for its reply.
    pub async fn rpc(&mut self, body: &str) -> Result<RpcReply, DomainError> {
        self.message_id += 1;
        self.send(&frame_rpc(self.message_id, body)).await?;
        let reply = self.read_message().await?;
        parse_reply(self.host(), &reply)
    }

    /// Politely ends the session, then drops the SSH connection.
    pub async fn close(mut self) -> Result<(), DomainError> {
        if let Err(e) = self.rpc("<close-session/>").await {
            warn!(host = self.host(), error = %e, "close-session was not acknowledged");
        }
        self.ssh.close().await
    }

    fn host(&self) -> &str {
        self.ssh.host()
    }

    async fn send(&mut self, payload: &str) -> Result<(), DomainError> {
        self.channel
            .data(payload.as_bytes())
            .await
            .map_err(|e| DomainError::transport(self.ssh.host(), e))
    }

    async fn read_message(&mut self) -> Result<String, DomainError> {
        loop {
            if let Some(message) = take_message(&mut self.buffer) {
                return Ok(message);
            }

            match self.channel.wait().await {
                Some(ChannelMsg::Data { ref data }) => self.buffer.extend_from_slice(data),
                Some(ChannelMsg::Eof) | Some(ChannelMsg::Close) | None => {
                    return Err(DomainError::transport(
                        self.ssh.host(),
                        "NETCONF channel closed by peer",
                    ));
                }
                Some(_) => {}
            }
        }
    }
}

pub fn frame_rpc(message_id: u64, body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <rpc message-id=\"{}\" xmlns=\"urn:ietf:params:xml:ns:netconf:base:1.0\">{}</rpc>\n{}",
        message_id, body, END_OF_MESSAGE
    )
}

/// Removes the first complete message from `buffer`, if one has arrived.
pub fn take_message(buffer: &mut Vec<u8>) -> Option<String> {
    let marker = END_OF_MESSAGE.as_bytes();
    let end = buffer
        .windows(marker.len())
        .position(|window| window == marker)?;

    let message = String::from_utf8_lossy(&buffer[..end]).trim().to_string();
    buffer.drain(..end + marker.len());
    Some(message)
}

pub fn parse_reply(host: &str, reply: &str) -> Result<RpcReply, DomainError> {
    let open = reply
        .find("<rpc-reply")
        .ok_or_else(|| DomainError::parse_failure(host, "response is not an rpc-reply"))?;
    let tag_end = reply[open..]
        .find('>')
        .map(|i| open + i)
        .ok_or_else(|| DomainError::parse_failure(host, "unterminated rpc-reply tag"))?;

    if reply[..tag_end].ends_with('/') {
        return Ok(RpcReply::Data(String::new()));
    }

    let close = reply
        .rfind("</rpc-reply>")
        .filter(|close| *close > tag_end)
        .ok_or_else(|| DomainError::parse_failure(host, "rpc-reply is not closed"))?;
    let content = &reply[tag_end + 1..close];

    // Warnings may accompany valid data; only severity "error" fails the RPC.
    let mut data = String::new();
    let mut rest = content;
    while let Some(start) = rest.find("<rpc-error") {
        data.push_str(&rest[..start]);
        let end = rest[start..]
            .find(RPC_ERROR_CLOSE)
            .map(|i| start + i + RPC_ERROR_CLOSE.len())
            .unwrap_or(rest.len());
        let block = &rest[start..end];

        let message = text_between(block, "<error-message>", "</error-message>")
            .map(|m| unescape_xml(m.trim()))
            .unwrap_or_else(|| "unspecified rpc-error".to_string());
        let severity = text_between(block, "<error-severity>", "</error-severity>")
            .map(str::trim)
            .unwrap_or("error");

        if severity != "warning" {
            return Ok(RpcReply::Error(message));
        }
        warn!(host, warning = %message, "RPC reply carried a warning");
        rest = &rest[end..];
    }
    data.push_str(rest);

    Ok(RpcReply::Data(unescape_xml(data.trim())))
}

fn text_between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let end = text[start..].find(close)? + start;
    Some(&text[start..end])
}

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
