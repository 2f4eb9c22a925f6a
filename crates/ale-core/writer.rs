//! ALE text serialization
//!
//! Renders a [`ParsedFile`] as Heading, Column and Data sections. Header
//! order is deterministic: the well-known keys come first in a fixed order,
//! every other key follows sorted.

use std::io::Write;

use crate::{
    codec::{
        HEADER_AUDIO_FORMAT, HEADER_FIELD_DELIM, HEADER_FPS, HEADER_VIDEO_FORMAT, SECTION_COLUMN,
        SECTION_DATA, SECTION_HEADING,
    },
    parser::ParsedFile,
    utils::{join_fields, AleError},
    Result,
};

/// Well-known header keys in output order
const HEADER_ORDER: [&str; 4] = [
    HEADER_FIELD_DELIM,
    HEADER_VIDEO_FORMAT,
    HEADER_AUDIO_FORMAT,
    HEADER_FPS,
];

/// Header keys in output order
fn ordered_header_keys(file: &ParsedFile) -> Vec<&str> {
    let mut keys: Vec<&str> = HEADER_ORDER
        .iter()
        .copied()
        .filter(|key| file.headers.contains_key(*key))
        .collect();

    let mut rest: Vec<&str> = file
        .headers
        .keys()
        .map(String::as_str)
        .filter(|key| !HEADER_ORDER.contains(key))
        .collect();
    rest.sort_unstable();

    keys.extend(rest);
    keys
}

/// Serialize a document to ALE text
///
/// # Example
///
/// ```rust
/// use ale_core::{parser::ParsedFile, writer::write_ale};
///
/// let mut file = ParsedFile::new();
/// file.headers.insert("FPS".into(), "24.00".into());
/// file.columns = vec!["Name".into()];
///
/// assert_eq!(write_ale(&file), "Heading\nFPS\t24.00\n\nColumn\nName\n\nData\n");
/// ```
#[must_use]
pub fn write_ale(file: &ParsedFile) -> String {
    let mut out = String::new();

    out.push_str(SECTION_HEADING);
    out.push('\n');
    for key in ordered_header_keys(file) {
        let value = file.header(key).unwrap_or_default();
        out.push_str(key);
        out.push('\t');
        out.push_str(value);
        out.push('\n');
    }
    out.push('\n');

    out.push_str(SECTION_COLUMN);
    out.push('\n');
    out.push_str(&join_fields(&file.columns));
    out.push_str("\n\n");

    out.push_str(SECTION_DATA);
    out.push('\n');
    for row in &file.rows {
        let values: Vec<&str> = file
            .columns
            .iter()
            .map(|column| ParsedFile::value(row, column))
            .collect();
        out.push_str(&join_fields(&values));
        out.push('\n');
    }

    out
}

/// Serialize a document into a writer
///
/// # Errors
///
/// Returns [`AleError::StreamWrite`] if the writer fails.
pub fn write_ale_to(file: &ParsedFile, writer: &mut dyn Write) -> Result<()> {
    writer
        .write_all(write_ale(file).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| AleError::StreamWrite(format!("{e}")))
}
