use thiserror::Error;

use super::Key;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("Overwrite not allowed: key {key} already assigned in column '{column}'")]
    OverwriteNotAllowed { column: String, key: Key },

    #[error("Column '{0}' not found")]
    NoSuchColumn(String),

    #[error("Column '{0}' already exists")]
    DuplicateColumn(String),

    #[error("Column '{0}' has no committed values")]
    EmptyColumn(String),

    #[error("Key {key} not found in column '{column}'")]
    KeyNotFound { column: String, key: Key },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, DbError>;

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
