//! Heading section parser
//!
//! Collects `key<TAB>value` lines between the `Heading` marker and the next
//! marker. Lines with fewer than two fields are reported and skipped.

use crate::{
    parser::errors::{IssueCategory, ParseIssue},
    utils::{create_hash_map, split_fields, AleMap},
};

/// Accumulates header key/value pairs
#[derive(Debug)]
pub struct HeadingParser {
    /// Headers collected so far; later keys overwrite earlier ones
    headers: AleMap<String>,
    /// Issues found in heading lines
    issues: Vec<ParseIssue>,
}

impl HeadingParser {
    /// Create an empty heading parser
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: create_hash_map(),
            issues: Vec::new(),
        }
    }

    /// Parse one non-blank line inside the Heading section
    pub fn parse_line(&mut self, line: &str, line_no: usize) {
        let fields = split_fields(line);
        if fields.len() < 2 {
            self.issues.push(
                ParseIssue::warning(
                    IssueCategory::Heading,
                    format!("header line '{}' has no value", line.trim()),
                    line_no,
                )
                .with_suggestion("separate key and value with a tab".into()),
            );
            return;
        }

        let key = fields[0];
        if self
            .headers
            .insert(key.to_string(), fields[1].to_string())
            .is_some()
        {
            self.issues.push(ParseIssue::info(
                IssueCategory::Heading,
                format!("header '{key}' repeated; later value kept"),
                line_no,
            ));
        }
    }

    /// Finish and hand back headers plus issues
    #[must_use]
    pub fn finish(self) -> (AleMap<String>, Vec<ParseIssue>) {
        (self.headers, self.issues)
    }
}

impl Default for HeadingParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_trimmed_pairs() {
        let mut parser = HeadingParser::new();
        parser.parse_line("FPS\t 23.976 ", 2);
        parser.parse_line("VIDEO_FORMAT\t1080\textra", 3);

        let (headers, issues) = parser.finish();
        assert_eq!(headers.get("FPS").map(String::as_str), Some("23.976"));
        assert_eq!(headers.get("VIDEO_FORMAT").map(String::as_str), Some("1080"));
        assert!(issues.is_empty());
    }

    #[test]
    fn single_field_line_is_reported() {
        let mut parser = HeadingParser::new();
        parser.parse_line("FIELD_DELIM", 2);

        let (headers, issues) = parser.finish();
        assert!(headers.is_empty());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 2);
        assert!(issues[0].is_blocking());
    }
}
