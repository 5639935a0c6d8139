// ============================================================================
// Transaction State
// ============================================================================

/// Transaction status of a single column.
///
/// State transitions:
/// ```text
/// Idle ──transaction()──> Staging
///   ^                        │
///   └──commit()/rollback()───┘
/// ```
///
/// Calling `transaction()` while already `Staging` keeps the column in
/// `Staging` and leaves the staged changes untouched. `commit()` and
/// `rollback()` while `Idle` are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionState {
    /// Mutations apply immediately to committed state
    #[default]
    Idle,

    /// Mutations are buffered until commit or rollback
    Staging,
}

impl TransactionState {
    /// Check if mutations are currently being buffered
    pub fn is_active(&self) -> bool {
        matches!(self, TransactionState::Staging)
    }
}

impl std::fmt::Display for TransactionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionState::Idle => write!(f, "IDLE"),
            TransactionState::Staging => write!(f, "STAGING"),
        }
    }
}
