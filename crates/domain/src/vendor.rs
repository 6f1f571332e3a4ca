use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Device families the tool knows how to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Juniper,
    CiscoIos,
}

impl Vendor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Juniper => "juniper",
            Vendor::CiscoIos => "cisco_ios",
        }
    }
}

impl FromStr for Vendor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "juniper" | "junos" => Ok(Vendor::Juniper),
            "cisco_ios" | "cisco-ios" | "ciscoios" | "ios" => Ok(Vendor::CiscoIos),
            _ => Err(DomainError::UnsupportedVendor(s.to_string())),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configured router whose vendor has already been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    pub hostname: String,
    pub vendor: Vendor,
}

impl HostTarget {
    pub fn new(hostname: impl AsRef<str>, vendor: Vendor) -> Self {
        Self {
            hostname: hostname.as_ref().trim().to_string(),
            vendor,
        }
    }

    pub fn parse(hostname: &str, vendor: &str) -> Result<Self, DomainError> {
        Ok(Self::new(hostname, vendor.parse()?))
    }
}
