//! Utility functions and shared types for the ALE codec
//!
//! Contains the line and field helpers shared by the parser and writer,
//! the hash map constructors, and the crate error types.
//!
//! # Example
//!
//! ```rust
//! use ale_core::utils::{split_fields, strip_bom};
//!
//! let (text, had_bom) = strip_bom("\u{FEFF}Name\tStart");
//! assert!(had_bom);
//! assert_eq!(split_fields(text), vec!["Name", "Start"]);
//! ```

pub mod errors;
pub mod hashers;

pub use errors::{AleError, ErrorCategory};
pub use hashers::{create_hash_map, create_hash_map_with_capacity, AleMap};

/// Field separator used by every ALE line
pub const FIELD_SEPARATOR: char = '\t';

/// Strip a leading UTF-8 byte order mark
///
/// Returns the remaining text and whether a BOM was present.
#[must_use]
pub fn strip_bom(text: &str) -> (&str, bool) {
    text.strip_prefix('\u{FEFF}')
        .map_or((text, false), |rest| (rest, true))
}

/// Split a line on tabs, trimming surrounding whitespace from every field
#[must_use]
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).map(str::trim).collect()
}

/// Join fields with tabs
#[must_use]
pub fn join_fields<S: AsRef<str>>(fields: &[S]) -> String {
    let mut out = String::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(FIELD_SEPARATOR);
        }
        out.push_str(field.as_ref());
    }
    out
}

/// Parse a finite decimal number, rejecting NaN and infinities
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_bom_only_touches_leading_mark() {
        assert_eq!(strip_bom("Heading"), ("Heading", false));
        assert_eq!(strip_bom("\u{FEFF}Heading"), ("Heading", true));
        assert_eq!(strip_bom("A\u{FEFF}"), ("A\u{FEFF}", false));
    }

    #[test]
    fn split_trims_fields_and_keeps_empties() {
        assert_eq!(split_fields(" a \t\tb "), vec!["a", "", "b"]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn join_uses_tabs() {
        assert_eq!(join_fields(&["Name", "Start", "End"]), "Name\tStart\tEnd");
        assert_eq!(join_fields::<&str>(&[]), "");
    }

    #[test]
    fn parse_finite_rejects_nan() {
        assert_eq!(parse_finite(" 23.976 "), Some(23.976));
        assert_eq!(parse_finite("NaN"), None);
        assert_eq!(parse_finite("inf"), None);
        assert_eq!(parse_finite("abc"), None);
    }
}
