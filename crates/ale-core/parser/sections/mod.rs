//! Section-specific parsers for ALE documents
//!
//! Each parser handles the content lines of one section. The coordinating
//! state machine in `parser::main` decides which section a line belongs to
//! and forwards it here.

pub mod columns;
pub mod data;
pub mod heading;

pub use columns::parse_column_line;
pub use data::DataParser;
pub use heading::HeadingParser;

/// Section a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionType {
    /// `Heading`: key/value header lines
    Heading,
    /// `Column`: the single column declaration line
    Column,
    /// `Data`: one row per line
    Data,
}

impl SectionType {
    /// Marker text introducing the section
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Heading => crate::codec::SECTION_HEADING,
            Self::Column => crate::codec::SECTION_COLUMN,
            Self::Data => crate::codec::SECTION_DATA,
        }
    }

    /// Recognize a marker line, compared after trimming
    #[must_use]
    pub fn from_marker(line: &str) -> Option<Self> {
        match line.trim() {
            crate::codec::SECTION_HEADING => Some(Self::Heading),
            crate::codec::SECTION_COLUMN => Some(Self::Column),
            crate::codec::SECTION_DATA => Some(Self::Data),
            _ => None,
        }
    }
}
