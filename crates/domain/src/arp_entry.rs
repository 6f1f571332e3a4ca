/// A single neighbor learned from a router's ARP table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpEntry {
    pub ip_address: String,
    pub interface: String,
    pub hostname: String,
}

impl ArpEntry {
    /// Builds an entry, trimming surrounding whitespace from every field.
    pub fn new(
        ip_address: impl AsRef<str>,
        interface: impl AsRef<str>,
        hostname: impl AsRef<str>,
    ) -> Self {
        Self {
            ip_address: ip_address.as_ref().trim().to_string(),
            interface: interface.as_ref().trim().to_string(),
            hostname: hostname.as_ref().trim().to_string(),
        }
    }
}
