// ============================================================================
// Transaction Staging
// ============================================================================
//
// Per-column, single-depth transactions:
// - State Pattern: a column is either Idle or Staging
// - Command Pattern: staged work is a set of pending Changes that commit
//   applies and rollback discards
//
// ============================================================================

pub mod change;
pub mod state;

pub use change::{Change, StagingBuffer};
pub use state::TransactionState;
