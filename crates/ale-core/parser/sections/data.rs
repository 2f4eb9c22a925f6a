//! Data section parser
//!
//! Maps each tab-separated data line onto the declared columns by position.

use crate::{
    parser::{
        ale_file::Row,
        errors::{IssueCategory, ParseIssue},
    },
    utils::{create_hash_map_with_capacity, split_fields},
};

/// Accumulates data rows
#[derive(Debug, Default)]
pub struct DataParser {
    /// Rows collected so far
    rows: Vec<Row>,
    /// Source line of each row
    lines: Vec<usize>,
    /// Issues found in data lines
    issues: Vec<ParseIssue>,
}

impl DataParser {
    /// Create an empty data parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one non-blank line inside the Data section
    ///
    /// Rows are only recorded once at least one column is declared.
    pub fn parse_line(&mut self, line: &str, line_no: usize, columns: &[String]) {
        if columns.is_empty() {
            self.issues.push(
                ParseIssue::error(
                    IssueCategory::Data,
                    "data row before any column declaration; row dropped".into(),
                    line_no,
                )
                .with_suggestion("declare columns after a Column marker".into()),
            );
            return;
        }

        let values = split_fields(line);
        let extra = values.get(columns.len()..).unwrap_or_default();
        if extra.iter().any(|v| !v.is_empty()) {
            self.issues.push(ParseIssue::warning(
                IssueCategory::Data,
                format!(
                    "row has {} fields but {} columns are declared; extra fields ignored",
                    values.len(),
                    columns.len()
                ),
                line_no,
            ));
        } else if values.len() < columns.len() {
            self.issues.push(ParseIssue::info(
                IssueCategory::Data,
                format!(
                    "row has {} of {} fields; missing values left empty",
                    values.len(),
                    columns.len()
                ),
                line_no,
            ));
        }

        let mut row = create_hash_map_with_capacity(columns.len());
        for (i, column) in columns.iter().enumerate() {
            let value = values.get(i).copied().unwrap_or_default();
            row.insert(column.clone(), value.to_string());
        }
        self.rows.push(row);
        self.lines.push(line_no);
    }

    /// Finish and hand back rows, their source lines and issues
    #[must_use]
    pub fn finish(self) -> (Vec<Row>, Vec<usize>, Vec<ParseIssue>) {
        (self.rows, self.lines, self.issues)
    }
}
