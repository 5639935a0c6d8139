use crate::core::{DbError, Key, Result, Row};
use crate::facade::DatabaseConfig;
use crate::result::TableSnapshot;
use crate::storage::Column;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::debug;

/// A fixed set of named columns.
///
/// Columns are created once at construction and never removed. Each column
/// keeps its own transaction; there is no transaction spanning several
/// columns.
///
/// # Examples
///
/// ```
/// use memcolumn::Database;
///
/// # fn main() -> memcolumn::Result<()> {
/// let mut db = Database::new(["temperature", "pressure"])?;
/// db.column_mut("temperature")?.insert([(1, 2), (3, 4)])?;
/// db.column_mut("pressure")?.insert([(4, 5)])?;
///
/// let snapshot = db.render();
/// assert_eq!(snapshot.row_count(), 3);
/// assert_eq!(snapshot.cell(4, "temperature"), None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    config: DatabaseConfig,
    table_names: Vec<String>,
    columns: HashMap<String, Column>,
}

impl Database {
    /// Create a database with one empty column per name.
    ///
    /// # Errors
    /// `DuplicateColumn` if a name appears twice.
    pub fn new<I, S>(table_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(table_names, DatabaseConfig::default())
    }

    /// Create a database with custom configuration
    pub fn with_config<I, S>(table_names: I, config: DatabaseConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut columns = HashMap::new();

        for name in table_names {
            let name: String = name.into();
            if columns.contains_key(&name) {
                return Err(DbError::DuplicateColumn(name));
            }
            columns.insert(name.clone(), Column::with_format(name.clone(), config.format.clone()));
            names.push(name);
        }

        debug!(database = %config.name, columns = names.len(), "created database");

        Ok(Self {
            config,
            table_names: names,
            columns,
        })
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Column names in declaration order
    pub fn table_names(&self) -> &[String] {
        &self.table_names
    }

    /// # Errors
    /// `NoSuchColumn` if `name` was not declared.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .get(name)
            .ok_or_else(|| DbError::NoSuchColumn(name.to_string()))
    }

    /// # Errors
    /// `NoSuchColumn` if `name` was not declared.
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns
            .get_mut(name)
            .ok_or_else(|| DbError::NoSuchColumn(name.to_string()))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Columns in declaration order
    pub fn columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.table_names
            .iter()
            .filter_map(|name| self.columns.get(name))
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.table_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table_names.is_empty()
    }

    /// Project the committed state of every column into one table.
    ///
    /// Staged changes of open transactions are not included.
    pub fn render(&self) -> TableSnapshot {
        let keys: BTreeSet<Key> = self
            .columns()
            .flat_map(|column| column.committed().keys().copied())
            .collect();

        let rows: Vec<Row> = keys
            .into_iter()
            .map(|key| (key, self.columns().map(|column| column.get(key)).collect()))
            .collect();

        TableSnapshot::new(self.table_names.clone(), rows)
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().format(&self.config.format))
    }
}
