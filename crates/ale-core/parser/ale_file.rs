//! In-memory structure of an ALE document

use crate::utils::{create_hash_map, AleMap};

/// One data row: column name to raw value
pub type Row = AleMap<String>;

/// Parsed ALE document
///
/// Every row holds an entry for every declared column; missing trailing
/// values are stored as empty strings.
#[derive(Debug, Clone, Default)]
pub struct ParsedFile {
    /// Heading key/value pairs
    pub headers: AleMap<String>,
    /// Column names in declaration order
    pub columns: Vec<String>,
    /// Data rows in file order
    pub rows: Vec<Row>,
    /// 1-based source line of each row; empty for documents built in memory
    pub row_lines: Vec<usize>,
}

impl ParsedFile {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: create_hash_map(),
            columns: Vec::new(),
            rows: Vec::new(),
            row_lines: Vec::new(),
        }
    }

    /// Header value by key
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Whether a column is declared
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Raw value of a column in a row, empty when absent
    #[must_use]
    pub fn value<'a>(row: &'a Row, column: &str) -> &'a str {
        row.get(column).map_or("", String::as_str)
    }

    /// Source line of a row, 0 when unknown
    #[must_use]
    pub fn row_line(&self, index: usize) -> usize {
        self.row_lines.get(index).copied().unwrap_or(0)
    }

    /// Fill in every declared column missing from any row
    pub(crate) fn backfill_rows(&mut self) {
        for row in &mut self.rows {
            for column in &self.columns {
                row.entry(column.clone()).or_default();
            }
        }
    }
}
