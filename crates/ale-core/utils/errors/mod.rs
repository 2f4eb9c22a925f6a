//! Error types for the ALE codec
//!
//! Provides the crate-wide `AleError` enum, its `Result` alias and the
//! `ErrorCategory` used to group failures.
//!
//! # Examples
//!
//! ```rust
//! use ale_core::utils::errors::{AleError, ErrorCategory};
//!
//! let err = AleError::invalid_timecode("25:99:00:00", "minutes out of range");
//! assert_eq!(err.category(), ErrorCategory::Format);
//! assert!(err.suggestion().is_some());
//! ```

mod category;
mod core;

pub use self::core::{AleError, Result};
pub use category::ErrorCategory;

/// Convert from standard I/O errors
impl From<std::io::Error> for AleError {
    fn from(err: std::io::Error) -> Self {
        Self::StreamRead(format!("{err}"))
    }
}
