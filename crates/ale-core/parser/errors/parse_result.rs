//! Parse result carrying collected issues alongside the outcome

use super::{parse_error::ParseError, parse_issue::ParseIssue};

/// Result type for structural parsing
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse outcome with the issues found on the way
#[derive(Debug, Clone)]
pub struct ParseResultWithIssues<T> {
    /// The parsed value, or the structural error strict mode raised
    pub result: ParseResult<T>,

    /// Issues in source order
    pub issues: Vec<ParseIssue>,
}

impl<T> ParseResultWithIssues<T> {
    /// Successful result with the given issues
    #[must_use]
    pub const fn with_issues(value: T, issues: Vec<ParseIssue>) -> Self {
        Self {
            result: Ok(value),
            issues,
        }
    }

    /// Failed result with the given issues
    #[must_use]
    pub const fn failed(error: ParseError, issues: Vec<ParseIssue>) -> Self {
        Self {
            result: Err(error),
            issues,
        }
    }

    /// Whether any collected issue would be rejected by strict parsing
    #[must_use]
    pub fn has_blocking_issues(&self) -> bool {
        self.issues.iter().any(ParseIssue::is_blocking)
    }

    /// Split into the outcome and the issues
    ///
    /// # Errors
    ///
    /// Returns the structural error if parsing failed.
    pub fn into_parts(self) -> ParseResult<(T, Vec<ParseIssue>)> {
        let issues = self.issues;
        self.result.map(|value| (value, issues))
    }
}
