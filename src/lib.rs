// ============================================================================
// memcolumn Library
// ============================================================================
//
// In-memory integer columns with stage/commit/rollback transactions.
//
// - storage:     the transactional Column
// - transaction: transaction state and the staging buffer
// - facade:      Database (a fixed set of named columns) and configuration
// - result:      rendered snapshots and the tabular formatter
//
// ============================================================================

pub mod core;
pub mod facade;
pub mod result;
pub mod storage;
pub mod transaction;

// Re-export main types for convenience
pub use crate::core::{DbError, Key, Result, Row, Value};
pub use facade::{Database, DatabaseConfig, FormatConfig};
pub use result::TableSnapshot;
pub use storage::Column;
pub use transaction::{Change, TransactionState};
