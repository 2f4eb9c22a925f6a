//! Parser error types for ALE documents
//!
//! # Module Organization
//!
//! - `parse_error` - Structural errors raised in strict mode
//! - `parse_issue` - Recoverable issues and warnings
//! - `parse_result` - Result types carrying issues

pub mod parse_error;
pub mod parse_issue;
pub mod parse_result;

pub use parse_error::ParseError;
pub use parse_issue::{IssueCategory, IssueSeverity, ParseIssue};
pub use parse_result::{ParseResult, ParseResultWithIssues};
