use crate::core::{DbError, Key, Result, Row, Value, aggregate};
use crate::facade::FormatConfig;
use crate::result::format::format_table;
use crate::transaction::{Change, StagingBuffer, TransactionState};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace, warn};

/// A named key-value column with single-depth transactional staging.
///
/// Outside a transaction, `insert` and `delete` change committed state
/// directly. After `transaction()` they are buffered until `commit()` applies
/// them or `rollback()` discards them. Readers (`mean`, `get`, `Display`)
/// always see committed state only.
///
/// # Examples
///
/// ```
/// use memcolumn::Column;
/// use std::collections::HashMap;
///
/// # fn main() -> memcolumn::Result<()> {
/// let mut col = Column::new("temperature");
/// col.insert(HashMap::from([(10, 10), (20, 11), (30, 9)]))?;
///
/// col.transaction();
/// col.delete([10]);
/// assert_eq!(col.mean()?, 10.0);
///
/// col.commit();
/// assert_eq!(col.mean()?, 10.0);
/// assert_eq!(col.get(10), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    committed: BTreeMap<Key, Value>,
    state: TransactionState,
    staged: StagingBuffer,
    format: FormatConfig,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_format(name, FormatConfig::default())
    }

    pub fn with_format(name: impl Into<String>, format: FormatConfig) -> Self {
        Self {
            name: name.into(),
            committed: BTreeMap::new(),
            state: TransactionState::Idle,
            staged: StagingBuffer::new(),
            format,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a batch of entries.
    ///
    /// Every key is checked against committed state before anything is
    /// written, so a rejected batch leaves the column untouched. Keys that
    /// are only staged may be inserted again; the newer value replaces the
    /// staged one.
    ///
    /// # Errors
    /// `OverwriteNotAllowed` for the first batch key that is already committed.
    pub fn insert<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let values: Vec<(Key, Value)> = values.into_iter().collect();

        if let Some(&(key, _)) = values.iter().find(|(key, _)| self.committed.contains_key(key)) {
            warn!(column = %self.name, key, "insert rejected: key already committed");
            return Err(DbError::OverwriteNotAllowed {
                column: self.name.clone(),
                key,
            });
        }

        if self.state.is_active() {
            debug!(column = %self.name, count = values.len(), "staging insert");
            for (key, value) in values {
                self.staged.stage_insert(key, value);
            }
        } else {
            debug!(column = %self.name, count = values.len(), "insert");
            self.committed.extend(values);
        }
        Ok(())
    }

    /// Delete keys. Unknown keys are ignored.
    ///
    /// Inside a transaction, deleting a staged insert cancels it; deleting a
    /// committed key marks it for removal on commit.
    pub fn delete<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = Key>,
    {
        if self.state.is_active() {
            for key in keys {
                if self.staged.cancel_insert(key) {
                    debug!(column = %self.name, key, "cancelled staged insert");
                } else if self.committed.contains_key(&key) {
                    debug!(column = %self.name, key, "staging delete");
                    self.staged.stage_delete(key);
                }
            }
        } else {
            let mut removed = 0usize;
            for key in keys {
                if self.committed.remove(&key).is_some() {
                    removed += 1;
                }
            }
            debug!(column = %self.name, removed, "delete");
        }
    }

    /// Arithmetic mean of the committed values. Staged changes are not seen.
    ///
    /// # Errors
    /// `EmptyColumn` if nothing is committed.
    pub fn mean(&self) -> Result<f64> {
        aggregate::mean(self.committed.values().copied())
            .ok_or_else(|| DbError::EmptyColumn(self.name.clone()))
    }

    /// Open a transaction. Repeated calls keep the current staged changes.
    pub fn transaction(&mut self) {
        if self.state.is_active() {
            trace!(column = %self.name, pending = self.staged.len(), "transaction already open");
            return;
        }
        debug!(column = %self.name, "begin transaction");
        self.state = TransactionState::Staging;
    }

    /// Discard staged changes and close the transaction.
    pub fn rollback(&mut self) {
        if self.state.is_active() {
            debug!(column = %self.name, discarded = self.staged.len(), "rollback");
        }
        self.staged.clear();
        self.state = TransactionState::Idle;
    }

    /// Apply staged inserts, then staged deletes, and close the transaction.
    ///
    /// Staged inserts replace committed entries without re-running the
    /// overwrite check.
    pub fn commit(&mut self) {
        let (inserts, deletes) = self.staged.take();

        if self.state.is_active() {
            debug!(
                column = %self.name,
                inserted = inserts.len(),
                deleted = deletes.len(),
                "commit"
            );
        }

        self.committed.extend(inserts);
        for key in &deletes {
            self.committed.remove(key);
        }
        self.state = TransactionState::Idle;
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }

    pub fn is_in_transaction(&self) -> bool {
        self.state.is_active()
    }

    /// Pending changes of the open transaction, inserts first
    pub fn staged_changes(&self) -> Vec<Change> {
        self.staged.changes()
    }

    /// Committed value for `key`
    pub fn get(&self, key: Key) -> Option<Value> {
        self.committed.get(&key).copied()
    }

    /// Committed value for `key`
    ///
    /// # Errors
    /// `KeyNotFound` if the key has no committed value.
    pub fn value(&self, key: Key) -> Result<Value> {
        self.get(key).ok_or_else(|| DbError::KeyNotFound {
            column: self.name.clone(),
            key,
        })
    }

    pub fn contains_key(&self, key: Key) -> bool {
        self.committed.contains_key(&key)
    }

    pub fn committed(&self) -> &BTreeMap<Key, Value> {
        &self.committed
    }

    /// Committed entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (Key, Value)> + '_ {
        self.committed.iter().map(|(&k, &v)| (k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        self.committed.values().copied()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Row> = self.iter().map(|(k, v)| (k, vec![Some(v)])).collect();
        let headers = [self.name.clone()];
        f.write_str(&format_table(&headers, &rows, &self.format))
    }
}
