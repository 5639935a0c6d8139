pub mod config;
pub mod database;

pub use config::{DatabaseConfig, FormatConfig};
pub use database::Database;
