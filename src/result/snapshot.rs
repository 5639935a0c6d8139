use crate::core::{Key, Result, Row, Value};
use crate::facade::FormatConfig;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::format::format_table;

/// Read-only projection of the committed state of several columns.
///
/// Rows are the union of all committed keys, sorted ascending. A cell is
/// `None` when its column has no committed value for the row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TableSnapshot {
    /// Build a snapshot from arbitrary rows.
    ///
    /// Rows are sorted by key and each row is padded with empty cells or
    /// truncated to one cell per column. For a repeated key the first row
    /// is kept.
    pub fn new(columns: Vec<String>, mut rows: Vec<Row>) -> Self {
        rows.sort_by_key(|(key, _)| *key);
        rows.dedup_by_key(|(key, _)| *key);
        for (_, cells) in &mut rows {
            cells.resize(columns.len(), None);
        }
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in ascending key order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at row `key` in `column`; `None` if either is absent or the cell is empty
    pub fn cell(&self, key: Key, column: &str) -> Option<Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        let pos = self.rows.binary_search_by_key(&key, |(k, _)| *k).ok()?;
        self.rows[pos].1.get(idx).copied().flatten()
    }

    /// Committed entries of one column, empty cells left out
    fn column_entries(&self, idx: usize) -> BTreeMap<Key, Value> {
        self.rows
            .iter()
            .filter_map(|(key, cells)| cells.get(idx).copied().flatten().map(|v| (*key, v)))
            .collect()
    }

    /// Render with the given formatter settings
    pub fn format(&self, config: &FormatConfig) -> String {
        format_table(&self.columns, &self.rows, config)
    }

    /// Export as a JSON object of column name to `{key: value}` maps.
    ///
    /// Empty cells are left out.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Serializes as a map of column name to its `{key: value}` entries
impl Serialize for TableSnapshot {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (idx, name) in self.columns.iter().enumerate() {
            map.serialize_entry(name, &self.column_entries(idx))?;
        }
        map.end()
    }
}

impl fmt::Display for TableSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&FormatConfig::default()))
    }
}
