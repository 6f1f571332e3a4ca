use super::ssh::SshSession;
use async_trait::async_trait;
use jping_application::ports::NetworkElement;
use jping_domain::{ArpEntry, Credentials, DomainError};
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

const SHOW_ARP: &str = "show ip arp";

/// Cisco IOS router scraped over SSH exec.
///
/// Nothing stays open between commands: every `run` is its own SSH
/// connection, so `connect` and `disconnect` only flip the session flag.
pub struct CiscoIosElement {
    hostname: String,
    port: u16,
    credentials: Credentials,
    timeout: Duration,
    open: bool,
}

impl CiscoIosElement {
    pub fn connect(hostname: &str, port: u16, credentials: &Credentials, timeout: Duration) -> Self {
        debug!(host = hostname, port, "Cisco IOS session ready");
        Self {
            hostname: hostname.to_string(),
            port,
            credentials: credentials.clone(),
            timeout,
            open: true,
        }
    }

    async fn run(&self, command: &str) -> Result<String, DomainError> {
        if !self.open {
            return Err(DomainError::NotConnected(self.hostname.clone()));
        }

        let ssh = SshSession::connect(&self.hostname, self.port, &self.credentials, self.timeout).await?;
        let output = ssh.exec(command).await;
        if let Err(e) = ssh.close().await {
            warn!(host = %self.hostname, error = %e, "SSH close failed");
        }
        output
    }
}

#[async_trait]
impl NetworkElement for CiscoIosElement {
    fn hostname(&self) -> &str {
        &self.hostname
    }

    async fn arp_table(&mut self) -> Result<Vec<ArpEntry>, DomainError> {
        let output = self.run(SHOW_ARP).await?;
        parse_arp_output(&self.hostname, &output)
    }

    async fn ping(&mut self, target_ip: &str, count: u32) -> Result<bool, DomainError> {
        // Only a literal address may reach the remote shell.
        let ip = IpAddr::from_str(target_ip.trim()).map_err(|_| {
            DomainError::parse_failure(&self.hostname, format!("refusing to ping '{}'", target_ip))
        })?;

        let output = self.run(&format!("ping {} repeat {}", ip, count)).await?;
        parse_ping_output(&self.hostname, &output)
    }

    async fn disconnect(&mut self) -> Result<(), DomainError> {
        self.open = false;
        Ok(())
    }
}

pub(crate) fn parse_arp_output(hostname: &str, output: &str) -> Result<Vec<ArpEntry>, DomainError> {
    // Format of `show ip arp`:
    // Protocol  Address          Age (min)  Hardware Addr   Type   Interface
    // Internet  10.0.0.1                5   0005.8671.e800  ARPA   GigabitEthernet0/0

    let mut table = Vec::new();
    let mut saw_header = false;

    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("Protocol") {
            saw_header = true;
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.iter().any(|f| *f == "Incomplete") {
            debug!(host = hostname, line, "Skipping incomplete ARP entry");
            continue;
        }

        if fields.len() < 6 || IpAddr::from_str(fields[1]).is_err() {
            return Err(DomainError::parse_failure(
                hostname,
                format!("unexpected ARP line '{}'", line),
            ));
        }

        table.push(ArpEntry::new(fields[1], fields[5], hostname));
    }

    // IOS prints the header even for an empty table.
    if !saw_header {
        return Err(DomainError::parse_failure(
            hostname,
            "show ip arp output has no header",
        ));
    }

    debug!(host = hostname, entries = table.len(), "ARP output parsed");
    Ok(table)
}

pub(crate) fn parse_ping_output(hostname: &str, output: &str) -> Result<bool, DomainError> {
    if let Some(rate) = success_rate(output) {
        return Ok(rate > 0);
    }

    match output.trim_start().lines().nth(2) {
        Some(line) => Ok(line.contains('!')),
        None => Err(DomainError::parse_failure(
            hostname,
            "ping output too short to judge",
        )),
    }
}

fn success_rate(output: &str) -> Option<u32> {
    output.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("Success rate is ")?;
        rest.split_whitespace().next()?.parse().ok()
    })
}
