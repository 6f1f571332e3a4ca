use crate::arp_entry::ArpEntry;

/// Baseline reachability of one neighbor, keyed by (hostname, ip_address).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingRecord {
    pub hostname: String,
    pub interface: String,
    pub ip_address: String,
    pub ping_result: bool,
}

impl PingRecord {
    pub fn new(
        hostname: impl Into<String>,
        interface: impl Into<String>,
        ip_address: impl Into<String>,
        ping_result: bool,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            interface: interface.into(),
            ip_address: ip_address.into(),
            ping_result,
        }
    }

    pub fn from_arp_entry(entry: ArpEntry, ping_result: bool) -> Self {
        Self {
            hostname: entry.hostname,
            interface: entry.interface,
            ip_address: entry.ip_address,
            ping_result,
        }
    }

    pub fn key(&self) -> (&str, &str) {
        (&self.hostname, &self.ip_address)
    }
}

/// One line of the post-check report: the stored result next to a fresh ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub hostname: String,
    pub interface: String,
    pub ip_address: String,
    pub first_run: bool,
    pub second_run: bool,
}

impl ComparisonRow {
    pub fn from_record(record: PingRecord, second_run: bool) -> Self {
        Self {
            hostname: record.hostname,
            interface: record.interface,
            ip_address: record.ip_address,
            first_run: record.ping_result,
            second_run,
        }
    }

    pub fn changed(&self) -> bool {
        self.first_run != self.second_run
    }

    /// Reachable before the change, unreachable after it.
    pub fn regressed(&self) -> bool {
        self.first_run && !self.second_run
    }
}
