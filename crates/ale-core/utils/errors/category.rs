//! Error categorization and suggestion utilities
//!
//! Groups codec errors into coarse categories for filtering in tools and
//! logs, and offers short hints for the common input mistakes.

use super::AleError;
use core::fmt;

/// Error category for filtering and user interface organization
///
/// # Examples
///
/// ```rust
/// use ale_core::utils::errors::{AleError, ErrorCategory};
///
/// assert_eq!(AleError::EmptyInput.category(), ErrorCategory::Input);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Reading or writing the underlying stream failed
    Io,

    /// The section structure could not be understood
    Parsing,

    /// A field value (timecode, CDL, frame rate) was malformed
    Format,

    /// The caller supplied unusable input (no rows, no timeline)
    Input,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "io"),
            Self::Parsing => write!(f, "parsing"),
            Self::Format => write!(f, "format"),
            Self::Input => write!(f, "input"),
        }
    }
}

impl ErrorCategory {
    /// Human-readable category name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Io => "I/O",
            Self::Parsing => "Parsing",
            Self::Format => "Format",
            Self::Input => "Input",
        }
    }

    /// Whether the user can typically fix errors in this category by editing input
    #[must_use]
    pub const fn is_user_fixable(self) -> bool {
        !matches!(self, Self::Io)
    }
}

impl AleError {
    /// Get error category for filtering/grouping
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::StreamRead(_) | Self::StreamWrite(_) => ErrorCategory::Io,
            Self::Parse(_) => ErrorCategory::Parsing,
            Self::InvalidTimecode { .. }
            | Self::InvalidCdl { .. }
            | Self::InvalidFrameRate { .. }
            | Self::InvalidField { .. } => ErrorCategory::Format,
            Self::EmptyInput | Self::NilTimeline => ErrorCategory::Input,
        }
    }

    /// Get suggested action for this error
    ///
    /// Returns `None` for errors that don't have a standard fix.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidTimecode { .. } => {
                Some("Use HH:MM:SS:FF (or HH:MM:SS;FF for drop-frame) or a bare frame count")
            }
            Self::InvalidCdl { .. } => {
                Some("ASC_SOP needs nine numbers: (slope x3)(offset x3)(power x3)")
            }
            Self::InvalidFrameRate { .. } => Some("Use a positive number such as 23.976 or 25"),
            Self::InvalidField { .. } => Some("Remove tabs and line breaks from metadata values"),
            Self::EmptyInput => Some("Add at least one row after the Data marker"),
            Self::Parse(_) => Some("Check the Heading, Column and Data markers"),
            Self::NilTimeline | Self::StreamRead(_) | Self::StreamWrite(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_categories() {
        assert_eq!(
            AleError::StreamRead("x".into()).category(),
            ErrorCategory::Io
        );
        assert_eq!(
            AleError::invalid_cdl("(1 2)", "too few values").category(),
            ErrorCategory::Format
        );
        assert_eq!(AleError::NilTimeline.category(), ErrorCategory::Input);
    }

    #[test]
    fn error_suggestions() {
        assert!(AleError::invalid_timecode("x", "y").suggestion().is_some());
        assert!(AleError::EmptyInput.suggestion().is_some());
        assert!(AleError::NilTimeline.suggestion().is_none());
        assert!(AleError::invalid_field("Scene", "contains a tab")
            .suggestion()
            .is_some());
    }

    #[test]
    fn io_is_not_user_fixable() {
        assert!(!ErrorCategory::Io.is_user_fixable());
        assert!(ErrorCategory::Format.is_user_fixable());
        assert_eq!(ErrorCategory::Io.name(), "I/O");
        assert_eq!(ErrorCategory::Parsing.to_string(), "parsing");
    }
}
