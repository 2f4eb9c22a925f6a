//! Main parser coordination
//!
//! Contains the `Parser` state machine that walks the document line by line,
//! switches state on `Heading`, `Column` and `Data` markers, and forwards
//! content lines to the section parsers.

use tracing::{debug, trace, warn};

use super::{
    ale_file::ParsedFile,
    errors::{IssueCategory, ParseError, ParseIssue, ParseResultWithIssues},
    sections::{parse_column_line, DataParser, HeadingParser, SectionType},
};
use crate::utils::strip_bom;

/// Where the scanner currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Before any marker
    Preamble,
    /// Inside Heading
    Heading,
    /// After `Column`, waiting for the declaration line
    AwaitingColumns {
        /// Line of the `Column` marker
        marker_line: usize,
    },
    /// Columns declared, waiting for `Data`
    Columns,
    /// Inside Data
    Data,
}

/// Internal parser state for one document
pub(super) struct Parser<'a> {
    /// Source text being parsed
    source: &'a str,
    /// Reject blocking issues instead of collecting them
    strict: bool,
    /// Current section state
    state: State,
    /// Heading collector
    heading: HeadingParser,
    /// Declared columns
    columns: Vec<String>,
    /// Whether a column declaration has been seen
    columns_declared: bool,
    /// Data collector
    data: DataParser,
    /// Structural issues
    issues: Vec<ParseIssue>,
}

impl<'a> Parser<'a> {
    /// Create new parser for source text
    pub fn new(source: &'a str, strict: bool) -> Self {
        Self {
            source,
            strict,
            state: State::Preamble,
            heading: HeadingParser::new(),
            columns: Vec::new(),
            columns_declared: false,
            data: DataParser::new(),
            issues: Vec::new(),
        }
    }

    /// Parse the complete document
    pub fn parse(mut self) -> ParseResultWithIssues<ParsedFile> {
        let (text, had_bom) = strip_bom(self.source);
        if had_bom {
            trace!("stripped byte order mark");
        }

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            if let Some(section) = SectionType::from_marker(raw) {
                self.enter_section(section, line_no);
            } else {
                self.parse_content(raw, line_no);
            }
        }

        if let State::AwaitingColumns { marker_line } = self.state {
            self.push_missing_declaration(marker_line);
        }

        self.finish()
    }

    /// Switch state on a marker line
    fn enter_section(&mut self, section: SectionType, line_no: usize) {
        if let State::AwaitingColumns { marker_line } = self.state {
            self.push_missing_declaration(marker_line);
        }

        self.state = match section {
            SectionType::Heading => State::Heading,
            SectionType::Column => {
                if self.columns_declared {
                    self.issues.push(ParseIssue::warning(
                        IssueCategory::Structure,
                        "repeated Column marker; new declaration replaces the old one".into(),
                        line_no,
                    ));
                }
                State::AwaitingColumns {
                    marker_line: line_no,
                }
            }
            SectionType::Data => State::Data,
        };
        trace!(line = line_no, marker = section.marker(), "section marker");
    }

    /// Route a non-marker, non-blank line
    fn parse_content(&mut self, line: &str, line_no: usize) {
        match self.state {
            State::Heading => self.heading.parse_line(line, line_no),
            State::AwaitingColumns { .. } => {
                let (columns, issues) = parse_column_line(line, line_no);
                self.issues.extend(issues);
                self.columns = columns;
                self.columns_declared = true;
                self.state = State::Columns;
            }
            State::Data => self.data.parse_line(line, line_no, &self.columns),
            State::Preamble | State::Columns => {
                self.issues.push(ParseIssue::warning(
                    IssueCategory::Structure,
                    format!("line '{}' is outside any section; ignored", line.trim()),
                    line_no,
                ));
            }
        }
    }

    /// Record a `Column` marker that never got a declaration
    fn push_missing_declaration(&mut self, marker_line: usize) {
        self.issues.push(
            ParseIssue::error(
                IssueCategory::Structure,
                "Column marker is not followed by a column declaration".into(),
                marker_line,
            )
            .with_suggestion("put tab-separated column names on the next line".into()),
        );
    }

    /// Assemble the document and apply strict mode
    fn finish(self) -> ParseResultWithIssues<ParsedFile> {
        let (headers, heading_issues) = self.heading.finish();
        let (rows, row_lines, data_issues) = self.data.finish();

        let mut issues = self.issues;
        issues.extend(heading_issues);
        issues.extend(data_issues);
        issues.sort_by_key(|issue| issue.line);

        let mut file = ParsedFile {
            headers,
            columns: self.columns,
            rows,
            row_lines,
        };
        file.backfill_rows();

        debug!(
            headers = file.headers.len(),
            columns = file.columns.len(),
            rows = file.rows.len(),
            issues = issues.len(),
            "parsed ALE sections"
        );

        if let Some(blocking) = issues.iter().find(|issue| issue.is_blocking()) {
            if self.strict {
                let error = ParseError::from_issue(blocking);
                return ParseResultWithIssues::failed(error, issues);
            }
            warn!(line = blocking.line, issue = %blocking, "tolerating malformed ALE structure");
        }

        ParseResultWithIssues::with_issues(file, issues)
    }
}
