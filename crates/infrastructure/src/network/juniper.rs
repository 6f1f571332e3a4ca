use super::netconf::{escape_xml, NetconfSession, RpcReply};
use async_trait::async_trait;
use jping_application::ports::NetworkElement;
use jping_domain::{ArpEntry, Credentials, DomainError};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const ARP_TABLE_RPC: &str =
    r#"<get-arp-table-information format="json"><no-resolve/></get-arp-table-information>"#;

/// Junos router driven through NETCONF RPCs with JSON-formatted replies.
pub struct JuniperElement {
    hostname: String,
    session: Option<NetconfSession>,
}

impl JuniperElement {
    pub async fn connect(
        hostname: &str,
        port: u16,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let session = NetconfSession::open(hostname, port, credentials, timeout).await?;
        Ok(Self {
            hostname: hostname.to_string(),
            session: Some(session),
        })
    }

    fn session(&mut self) -> Result<&mut NetconfSession, DomainError> {
        self.session
            .as_mut()
            .ok_or_else(|| DomainError::NotConnected(self.hostname.clone()))
    }
}

#[async_trait]
impl NetworkElement for JuniperElement {
    fn hostname(&self) -> &str {
        &self.hostname
    }

    async fn arp_table(&mut self) -> Result<Vec<ArpEntry>, DomainError> {
        let reply = self.session()?.rpc(ARP_TABLE_RPC).await?;
        match reply {
            RpcReply::Data(payload) => parse_arp_table(&self.hostname, &payload),
            RpcReply::Error(message) => Err(DomainError::RpcError {
                host: self.hostname.clone(),
                message,
            }),
        }
    }

    async fn ping(&mut self, target_ip: &str, count: u32) -> Result<bool, DomainError> {
        let rpc = ping_rpc(target_ip, count);
        let reply = self.session()?.rpc(&rpc).await?;
        match reply {
            RpcReply::Data(payload) => parse_ping(&self.hostname, &payload),
            RpcReply::Error(message) => {
                warn!(host = %self.hostname, ip = target_ip, error = %message, "Ping RPC rejected");
                Ok(false)
            }
        }
    }

    async fn disconnect(&mut self) -> Result<(), DomainError> {
        match self.session.take() {
            Some(session) => session.close().await,
            None => Ok(()),
        }
    }
}

fn ping_rpc(target_ip: &str, count: u32) -> String {
    format!(
        r#"<ping format="json"><host>{}</host><count>{}</count><rapid/></ping>"#,
        escape_xml(target_ip),
        count
    )
}

// Junos JSON wraps every element in a one-item array and leaf text in "data".
fn first(value: &Value) -> Option<&Value> {
    value.as_array()?.first()
}

fn leaf_text<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    first(value.get(key)?)?.get("data")?.as_str()
}

fn decode(hostname: &str, payload: &str) -> Result<Value, DomainError> {
    serde_json::from_str(payload)
        .map_err(|e| DomainError::parse_failure(hostname, format!("invalid JSON reply: {}", e)))
}

pub(crate) fn parse_arp_table(hostname: &str, payload: &str) -> Result<Vec<ArpEntry>, DomainError> {
    let doc = decode(hostname, payload)?;
    let info = doc
        .get("arp-table-information")
        .and_then(first)
        .ok_or_else(|| DomainError::parse_failure(hostname, "missing arp-table-information"))?;

    let entries: &[Value] = match info.get("arp-table-entry") {
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(DomainError::parse_failure(
                hostname,
                "arp-table-entry is not a list",
            ))
        }
        None => &[],
    };

    let table = entries
        .iter()
        .map(|entry| {
            let ip = leaf_text(entry, "ip-address")
                .ok_or_else(|| DomainError::parse_failure(hostname, "ARP entry without ip-address"))?;
            let interface = leaf_text(entry, "interface-name").ok_or_else(|| {
                DomainError::parse_failure(hostname, "ARP entry without interface-name")
            })?;
            Ok(ArpEntry::new(ip, interface, hostname))
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    debug!(host = hostname, entries = table.len(), "ARP reply parsed");
    Ok(table)
}

pub(crate) fn parse_ping(hostname: &str, payload: &str) -> Result<bool, DomainError> {
    let doc = decode(hostname, payload)?;
    let results = doc
        .get("ping-results")
        .and_then(first)
        .ok_or_else(|| DomainError::parse_failure(hostname, "missing ping-results"))?;

    Ok(results.get("ping-success").is_some())
}
