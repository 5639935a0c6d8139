/// Display settings for the tabular formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Text shown for a cell with no committed value
    pub missing_cell: String,

    /// Header text above the key column
    pub index_header: String,

    /// Separator placed between columns
    pub column_separator: String,

    /// Append a "N row(s)" footer
    pub show_row_count: bool,
}

impl FormatConfig {
    pub fn new() -> Self {
        Self {
            missing_cell: "NaN".to_string(),
            index_header: String::new(),
            column_separator: " | ".to_string(),
            show_row_count: false,
        }
    }

    /// Set the marker for missing cells
    pub fn missing_cell(mut self, marker: &str) -> Self {
        self.missing_cell = marker.to_string();
        self
    }

    /// Set the key column header
    pub fn index_header(mut self, header: &str) -> Self {
        self.index_header = header.to_string();
        self
    }

    /// Set the column separator
    pub fn column_separator(mut self, separator: &str) -> Self {
        self.column_separator = separator.to_string();
        self
    }

    /// Enable or disable the row count footer
    pub fn show_row_count(mut self, show: bool) -> Self {
        self.show_row_count = show;
        self
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Database configuration
///
/// # Examples
///
/// ```
/// use memcolumn::{DatabaseConfig, FormatConfig};
///
/// let config = DatabaseConfig::new()
///     .name("weather")
///     .format(FormatConfig::new().missing_cell("-"));
/// assert_eq!(config.name, "weather");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database name, used in log events
    pub name: String,

    /// Formatter settings shared by the database and its columns
    pub format: FormatConfig,
}

impl DatabaseConfig {
    pub fn new() -> Self {
        Self {
            name: "memcolumn".to_string(),
            format: FormatConfig::default(),
        }
    }

    /// Set the database name
    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Set the formatter settings
    pub fn format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new()
    }
}
