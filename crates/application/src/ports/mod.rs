mod network_element;
mod ping_record_repository;

pub use network_element::{NetworkElement, NetworkElementConnector};
pub use ping_record_repository::PingRecordRepository;
