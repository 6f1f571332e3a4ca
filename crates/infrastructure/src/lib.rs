//! jping infrastructure: SQLite result store and vendor device sessions.
pub mod database;
pub mod network;
pub mod repositories;
