//! Column declaration parser

use crate::{
    parser::errors::{IssueCategory, ParseIssue},
    utils::split_fields,
};

/// Parse the tab-separated column declaration line
///
/// Names are trimmed; trailing empty names (from a trailing tab) are dropped.
/// Duplicate names are kept in place and reported, since later values win
/// when rows are mapped by name.
#[must_use]
pub fn parse_column_line(line: &str, line_no: usize) -> (Vec<String>, Vec<ParseIssue>) {
    let mut issues = Vec::new();
    let mut names: Vec<&str> = split_fields(line);

    while names.last().is_some_and(|n| n.is_empty()) {
        names.pop();
    }

    for (i, name) in names.iter().enumerate() {
        if name.is_empty() {
            issues.push(ParseIssue::warning(
                IssueCategory::Column,
                format!("column {} has an empty name", i + 1),
                line_no,
            ));
        } else if names[..i].contains(name) {
            issues.push(ParseIssue::warning(
                IssueCategory::Column,
                format!("column '{name}' declared more than once"),
                line_no,
            ));
        }
    }

    (names.into_iter().map(str::to_string).collect(), issues)
}
