//! Importer and exporter traits for timeline interchange formats

use std::fmt;
use std::io::{Read, Write};

use ale_timeline::Timeline;

use super::{
    config::{DecoderConfig, EncoderConfig},
    decoder::AleDecoder,
    encoder::AleEncoder,
};
use crate::{utils::AleError, Result};

/// Metadata about an interchange format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// File extensions, without the dot
    pub extensions: Vec<String>,
    /// Brief description of the format
    pub description: String,
}

impl FormatInfo {
    /// Descriptor of the Avid Log Exchange format
    #[must_use]
    pub fn ale() -> Self {
        Self {
            name: "ALE".to_string(),
            extensions: vec!["ale".to_string()],
            description: "Avid Log Exchange tab-delimited clip log".to_string(),
        }
    }

    /// Whether `extension` belongs to this format, ignoring case and a leading dot
    #[must_use]
    pub fn matches_extension(&self, extension: &str) -> bool {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}

/// Reads timelines from a format
pub trait TimelineImporter: fmt::Debug + Send + Sync {
    /// Information about this format
    fn format_info(&self) -> &FormatInfo;

    /// Check if this importer handles the given file extension
    fn can_import(&self, extension: &str) -> bool {
        self.format_info().matches_extension(extension)
    }

    /// Import from a reader
    ///
    /// # Errors
    ///
    /// Returns an error if reading or decoding fails.
    fn import_from_reader(&self, reader: &mut dyn Read) -> Result<Timeline>;

    /// Import from a string
    ///
    /// # Errors
    ///
    /// Returns an error if decoding fails.
    fn import_from_str(&self, content: &str) -> Result<Timeline> {
        let mut cursor = std::io::Cursor::new(content.as_bytes());
        self.import_from_reader(&mut cursor)
    }
}

/// Writes timelines in a format
pub trait TimelineExporter: fmt::Debug + Send + Sync {
    /// Information about this format
    fn format_info(&self) -> &FormatInfo;

    /// Check if this exporter handles the given file extension
    fn can_export(&self, extension: &str) -> bool {
        self.format_info().matches_extension(extension)
    }

    /// Export to a writer
    ///
    /// # Errors
    ///
    /// Returns an error if the timeline is absent, cannot be encoded, or
    /// the writer fails.
    fn export_to_writer(&self, timeline: Option<&Timeline>, writer: &mut dyn Write) -> Result<()>;

    /// Export to a string
    ///
    /// # Errors
    ///
    /// Same as [`TimelineExporter::export_to_writer`], plus
    /// [`AleError::StreamWrite`] if the output is not UTF-8.
    fn export_to_string(&self, timeline: Option<&Timeline>) -> Result<String> {
        let mut buffer = Vec::new();
        self.export_to_writer(timeline, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| AleError::StreamWrite(format!("invalid UTF-8 output: {e}")))
    }
}

/// Shared descriptor, built once
fn ale_info() -> &'static FormatInfo {
    static INFO: std::sync::OnceLock<FormatInfo> = std::sync::OnceLock::new();
    INFO.get_or_init(FormatInfo::ale)
}

impl TimelineImporter for AleDecoder {
    fn format_info(&self) -> &FormatInfo {
        ale_info()
    }

    fn import_from_reader(&self, reader: &mut dyn Read) -> Result<Timeline> {
        self.decode(reader)
    }

    fn import_from_str(&self, content: &str) -> Result<Timeline> {
        self.decode_str(content)
    }
}

impl TimelineExporter for AleEncoder {
    fn format_info(&self) -> &FormatInfo {
        ale_info()
    }

    fn export_to_writer(&self, timeline: Option<&Timeline>, writer: &mut dyn Write) -> Result<()> {
        self.encode(timeline, writer)
    }

    fn export_to_string(&self, timeline: Option<&Timeline>) -> Result<String> {
        self.encode_to_string(timeline)
    }
}

/// ALE import and export with one pair of configurations
#[derive(Debug, Clone, Default)]
pub struct AleFormat {
    decoder: AleDecoder,
    encoder: AleEncoder,
}

impl AleFormat {
    /// Create a format handler from decoder and encoder options
    #[must_use]
    pub const fn new(decoder: DecoderConfig, encoder: EncoderConfig) -> Self {
        Self {
            decoder: AleDecoder::new(decoder),
            encoder: AleEncoder::new(encoder),
        }
    }

    /// Decoder half
    #[must_use]
    pub const fn decoder(&self) -> &AleDecoder {
        &self.decoder
    }

    /// Encoder half
    #[must_use]
    pub const fn encoder(&self) -> &AleEncoder {
        &self.encoder
    }
}

impl TimelineImporter for AleFormat {
    fn format_info(&self) -> &FormatInfo {
        ale_info()
    }

    fn import_from_reader(&self, reader: &mut dyn Read) -> Result<Timeline> {
        self.decoder.import_from_reader(reader)
    }

    fn import_from_str(&self, content: &str) -> Result<Timeline> {
        self.decoder.import_from_str(content)
    }
}

impl TimelineExporter for AleFormat {
    fn format_info(&self) -> &FormatInfo {
        ale_info()
    }

    fn export_to_writer(&self, timeline: Option<&Timeline>, writer: &mut dyn Write) -> Result<()> {
        self.encoder.export_to_writer(timeline, writer)
    }

    fn export_to_string(&self, timeline: Option<&Timeline>) -> Result<String> {
        self.encoder.export_to_string(timeline)
    }
}
