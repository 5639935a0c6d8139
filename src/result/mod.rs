pub mod format;
pub mod snapshot;

pub use format::format_table;
pub use snapshot::TableSnapshot;
