// ============================================================================
// Staged Change Tracking
// ============================================================================
//
// A StagingBuffer holds the pending inserts and deletes of one open
// transaction. It knows nothing about committed state; the owning column
// decides what gets staged and applies the buffer on commit.
//
// ============================================================================

use crate::core::{Key, Value};
use std::collections::{BTreeMap, BTreeSet};

/// A single pending operation in an open transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Insert `value` under `key` on commit
    Insert { key: Key, value: Value },

    /// Remove the committed entry for `key` on commit
    Delete { key: Key },
}

impl Change {
    /// Get the key affected by this change
    pub fn key(&self) -> Key {
        match self {
            Change::Insert { key, .. } => *key,
            Change::Delete { key } => *key,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Change::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Change::Delete { .. })
    }
}

/// Pending inserts and deletes of one transaction.
///
/// A key is never in both sets: staging a delete for a key with a pending
/// insert cancels the insert instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagingBuffer {
    inserts: BTreeMap<Key, Value>,
    deletes: BTreeSet<Key>,
}

impl StagingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an insert, replacing any value already staged for the key
    pub fn stage_insert(&mut self, key: Key, value: Value) {
        self.inserts.insert(key, value);
    }

    /// Drop a pending insert. Returns `true` if one was staged for `key`.
    pub fn cancel_insert(&mut self, key: Key) -> bool {
        self.inserts.remove(&key).is_some()
    }

    /// Mark a committed key for removal on commit
    pub fn stage_delete(&mut self, key: Key) {
        self.deletes.insert(key);
    }

    pub fn has_insert(&self, key: Key) -> bool {
        self.inserts.contains_key(&key)
    }

    pub fn has_delete(&self, key: Key) -> bool {
        self.deletes.contains(&key)
    }

    pub fn inserts(&self) -> &BTreeMap<Key, Value> {
        &self.inserts
    }

    pub fn deletes(&self) -> &BTreeSet<Key> {
        &self.deletes
    }

    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.deletes.is_empty()
    }

    /// Number of pending operations
    pub fn len(&self) -> usize {
        self.inserts.len() + self.deletes.len()
    }

    /// Pending changes in apply order: all inserts, then all deletes
    pub fn changes(&self) -> Vec<Change> {
        self.inserts
            .iter()
            .map(|(&key, &value)| Change::Insert { key, value })
            .chain(self.deletes.iter().map(|&key| Change::Delete { key }))
            .collect()
    }

    /// Take the staged sets, leaving the buffer empty
    pub fn take(&mut self) -> (BTreeMap<Key, Value>, BTreeSet<Key>) {
        (
            std::mem::take(&mut self.inserts),
            std::mem::take(&mut self.deletes),
        )
    }

    pub fn clear(&mut self) {
        self.inserts.clear();
        self.deletes.clear();
    }
}
