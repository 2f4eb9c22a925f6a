//! Core error type for ALE codec operations
//!
//! Provides the main `AleError` enum that every fallible decode or encode
//! operation returns. Structural parser failures are wrapped transparently
//! so callers can match on a single type.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` in the library)
//! - Every failure is a distinct, inspectable variant
//! - Carry the offending value so messages can point at the bad field

use crate::parser::errors::ParseError;
use thiserror::Error;

/// Main error type for ALE codec operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AleError {
    /// Reading the input stream failed
    #[error("failed to read ALE input: {0}")]
    StreamRead(String),

    /// Writing the output stream failed
    #[error("failed to write ALE output: {0}")]
    StreamWrite(String),

    /// Structural problem in the section layout
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The Data section contained no rows
    #[error("no data rows found in ALE input")]
    EmptyInput,

    /// A start, end or duration field could not be parsed or rendered
    #[error("invalid timecode '{value}': {reason}")]
    InvalidTimecode {
        /// Offending text or value
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// An ASC CDL field could not be parsed
    #[error("invalid CDL value '{value}': {reason}")]
    InvalidCdl {
        /// Offending text
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// A frame rate value could not be parsed
    #[error("invalid frame rate '{value}': {reason}")]
    InvalidFrameRate {
        /// Offending text
        value: String,
        /// What was wrong with it
        reason: String,
    },

    /// A value cannot be written as a single tab-delimited field
    #[error("invalid value for column '{column}': {reason}")]
    InvalidField {
        /// Column the value belongs to
        column: String,
        /// What was wrong with it
        reason: String,
    },

    /// Encode was called without a timeline
    #[error("cannot encode: no timeline provided")]
    NilTimeline,
}

impl AleError {
    /// Create timecode error
    pub fn invalid_timecode(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTimecode {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create CDL error
    pub fn invalid_cdl(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCdl {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create frame rate error
    pub fn invalid_frame_rate(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFrameRate {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create field error
    pub fn invalid_field(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Check if the caller can reasonably fix the input and retry
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Parse(_)
            | Self::EmptyInput
            | Self::InvalidTimecode { .. }
            | Self::InvalidCdl { .. }
            | Self::InvalidFrameRate { .. }
            | Self::InvalidField { .. }
            | Self::NilTimeline => true,

            Self::StreamRead(_) | Self::StreamWrite(_) => false,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, AleError>;
