/// Row key of a column. Keys are unique within one column.
pub type Key = i64;

/// Scalar stored under a key.
pub type Value = i64;

/// One rendered row: a key plus one optional cell per column.
/// `None` marks a column that has no committed value for the key.
pub type Row = (Key, Vec<Option<Value>>);
