// ============================================================================
// Tabular Formatter
// ============================================================================
//
// Renders key-indexed rows as an aligned text table. Display only; nothing
// in the transactional path depends on it.
//
// ============================================================================

use crate::core::Row;
use crate::facade::FormatConfig;

/// Render `rows` under `headers` as an aligned text table.
///
/// The first column holds the row keys. Cells without a value show
/// `config.missing_cell`.
pub fn format_table(headers: &[String], rows: &[Row], config: &FormatConfig) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|(key, values)| {
            std::iter::once(key.to_string())
                .chain(values.iter().map(|cell| match cell {
                    Some(value) => value.to_string(),
                    None => config.missing_cell.clone(),
                }))
                .collect()
        })
        .collect();

    let header: Vec<&str> = std::iter::once(config.index_header.as_str())
        .chain(headers.iter().map(String::as_str))
        .collect();

    // Calculate column widths
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(i) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 3);

    let header_line: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    lines.push(header_line.join(config.column_separator.as_str()).trim_end().to_string());

    let rule = config.column_separator.trim().chars().next().map_or(
        "-".to_string(),
        |c| format!("-{}-", if c == '|' { '+' } else { c }),
    );
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    lines.push(separator.join(rule.as_str()));

    // Keys left-aligned, values right-aligned; cells beyond the headers are dropped
    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (cell, &width))| {
                if i == 0 {
                    format!("{:<width$}", cell)
                } else {
                    format!("{:>width$}", cell)
                }
            })
            .collect();
        lines.push(line.join(config.column_separator.as_str()));
    }

    if config.show_row_count {
        lines.push(String::new());
        lines.push(format!("{} row(s)", cells.len()));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_column() {
        let rows: Vec<Row> = vec![(10, vec![Some(10)]), (20, vec![Some(11)])];
        let out = format_table(&headers(&["temperature"]), &rows, &FormatConfig::default());

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "   | temperature");
        assert_eq!(lines[1], "---+------------");
        assert_eq!(lines[2], "10 |          10");
        assert_eq!(lines[3], "20 |          11");
    }

    #[test]
    fn test_missing_cells_use_marker() {
        let rows: Vec<Row> = vec![(1, vec![Some(2), None])];
        let config = FormatConfig::new().missing_cell("-");
        let out = format_table(&headers(&["a", "b"]), &rows, &config);
        assert!(out.ends_with("1 | 2 | -"));
    }

    #[test]
    fn test_row_count_footer() {
        let rows: Vec<Row> = vec![(1, vec![Some(2)])];
        let config = FormatConfig::new().show_row_count(true);
        let out = format_table(&headers(&["a"]), &rows, &config);
        assert!(out.ends_with("1 row(s)"));
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let rows: Vec<Row> = vec![(1, vec![Some(1), Some(2)])];
        let out = format_table(&headers(&["a"]), &rows, &FormatConfig::default());
        assert_eq!(out.lines().last(), Some("1 | 1"));
    }

    #[test]
    fn test_empty_table_has_header_only() {
        let out = format_table(&headers(&["a"]), &[], &FormatConfig::default());
        assert_eq!(out.lines().count(), 2);
    }
}
