//! Parse issue types for recoverable parsing problems
//!
//! Anomalies the section parser tolerates (stray lines, short header lines,
//! rows wider than the column declaration) are collected as issues instead
//! of aborting the parse.

use core::fmt;

/// Parse issue severity levels
///
/// Ordered so that `severity >= IssueSeverity::Warning` selects issues that
/// strict parsing rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueSeverity {
    /// Information that may be useful but doesn't affect the result
    Info,

    /// Warning about non-standard layout that was worked around
    Warning,

    /// Data was dropped to recover
    Error,
}

impl fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Issue categories for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCategory {
    /// Section marker layout
    Structure,

    /// Heading key/value lines
    Heading,

    /// Column declaration
    Column,

    /// Data rows
    Data,

    /// Start, end and duration fields
    Timing,

    /// ASC CDL fields
    Color,
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Heading => write!(f, "heading"),
            Self::Column => write!(f, "column"),
            Self::Data => write!(f, "data"),
            Self::Timing => write!(f, "timing"),
            Self::Color => write!(f, "color"),
        }
    }
}

/// Recoverable problem found while reading an ALE document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Issue severity level
    pub severity: IssueSeverity,

    /// Issue category for filtering/grouping
    pub category: IssueCategory,

    /// Human-readable message
    pub message: String,

    /// Line number where issue occurred (1-based, 0 when unknown)
    pub line: usize,

    /// Suggested fix or explanation
    pub suggestion: Option<String>,
}

impl ParseIssue {
    /// Create new parse issue
    #[must_use]
    pub const fn new(
        severity: IssueSeverity,
        category: IssueCategory,
        message: String,
        line: usize,
    ) -> Self {
        Self {
            severity,
            category,
            message,
            line,
            suggestion: None,
        }
    }

    /// Add suggestion to existing issue
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Create info-level issue
    #[must_use]
    pub const fn info(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Info, category, message, line)
    }

    /// Create warning-level issue
    #[must_use]
    pub const fn warning(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Warning, category, message, line)
    }

    /// Create error-level issue
    #[must_use]
    pub const fn error(category: IssueCategory, message: String, line: usize) -> Self {
        Self::new(IssueSeverity::Error, category, message, line)
    }

    /// Whether strict parsing rejects this issue
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.severity >= IssueSeverity::Warning
    }
}

impl fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] line {}: {}",
            self.severity, self.category, self.line, self.message
        )?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}
