//! ALE section parser
//!
//! Splits a document into its Heading key/value pairs, ordered Column list
//! and Data rows. Parsing is single-pass and tolerant: anomalies are
//! collected as [`ParseIssue`]s unless strict parsing is requested.
//!
//! # Example
//!
//! ```rust
//! use ale_core::parser;
//!
//! let source = "Heading\nFPS\t24.00\n\nColumn\nName\tStart\n\nData\nClip001\t01:00:00:00\n";
//! let (file, issues) = parser::parse(source).into_parts()?;
//!
//! assert_eq!(file.header("FPS"), Some("24.00"));
//! assert_eq!(file.columns, vec!["Name", "Start"]);
//! assert_eq!(file.rows.len(), 1);
//! assert!(issues.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ale_file;
pub mod errors;
mod main;
pub mod sections;

pub use ale_file::{ParsedFile, Row};
pub use errors::{
    IssueCategory, IssueSeverity, ParseError, ParseIssue, ParseResult, ParseResultWithIssues,
};
pub use sections::SectionType;

/// Parse a document, collecting issues without failing
#[must_use]
pub fn parse(source: &str) -> ParseResultWithIssues<ParsedFile> {
    main::Parser::new(source, false).parse()
}

/// Parse a document, failing on the first issue of warning severity or above
#[must_use]
pub fn parse_strict(source: &str) -> ParseResultWithIssues<ParsedFile> {
    main::Parser::new(source, true).parse()
}

/// Parse with strictness chosen at runtime
#[must_use]
pub fn parse_with(source: &str, strict: bool) -> ParseResultWithIssues<ParsedFile> {
    main::Parser::new(source, strict).parse()
}
