//! Structural parse error for ALE documents
//!
//! The section parser is tolerant by default and reports anomalies as
//! [`ParseIssue`](super::ParseIssue)s. `ParseError` is produced only when a
//! caller asks for strict parsing and an issue of warning severity or
//! higher is found.

use thiserror::Error;

use super::parse_issue::ParseIssue;

/// Unrecoverable structural problem in an ALE document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Section markers or section content could not be accepted
    #[error("structural error at line {line}: {message}")]
    Structure {
        /// 1-based line of the offending text
        line: usize,
        /// What was wrong
        message: String,
    },
}

impl ParseError {
    /// Promote a collected issue to a hard error
    #[must_use]
    pub fn from_issue(issue: &ParseIssue) -> Self {
        Self::Structure {
            line: issue.line,
            message: issue.message.clone(),
        }
    }

    /// Line the error points at
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Structure { line, .. } => *line,
        }
    }
}
