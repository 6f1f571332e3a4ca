pub mod ping_record_repository;
mod ping_record_row_mapper;

pub use ping_record_repository::SqlitePingRecordRepository;
