pub mod cisco_ios;
pub mod connector;
pub mod juniper;
pub mod netconf;
pub mod ssh;

pub use cisco_ios::CiscoIosElement;
pub use connector::VendorConnector;
pub use juniper::JuniperElement;
