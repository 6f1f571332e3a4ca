//! jping domain layer
pub mod arp_entry;
pub mod check_mode;
pub mod check_report;
pub mod config;
pub mod errors;
pub mod ping_record;
pub mod vendor;

pub use arp_entry::ArpEntry;
pub use check_mode::CheckMode;
pub use check_report::{CheckReport, HostOutcome, HostReport, PreCheckSummary};
pub use config::{CliOverrides, Config, ConfigError, Credentials};
pub use errors::DomainError;
pub use ping_record::{ComparisonRow, PingRecord};
pub use vendor::{HostTarget, Vendor};
