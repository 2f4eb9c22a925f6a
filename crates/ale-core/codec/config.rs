//! Decoder and encoder configuration

use super::{COLUMN_NAME, DEFAULT_FRAME_RATE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options controlling how ALE text is decoded
///
/// A valid `FPS` header overrides `frame_rate` and re-derives `drop_frame`
/// from the rate.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct DecoderConfig {
    /// Frame rate used when the document has no usable `FPS` header
    pub frame_rate: f64,
    /// Column holding clip names
    pub name_column: String,
    /// Drop-frame mode used when the document has no usable `FPS` header
    ///
    /// Only reported in decode logs. Each timecode is read as drop-frame
    /// when its last separator is `;`, whatever this flag says.
    pub drop_frame: bool,
    /// Fail on structural issues instead of collecting them
    pub strict: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            name_column: COLUMN_NAME.to_string(),
            drop_frame: false,
            strict: false,
        }
    }
}

impl DecoderConfig {
    /// Set fallback frame rate
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Set the column holding clip names
    #[must_use]
    pub fn with_name_column(mut self, name_column: impl Into<String>) -> Self {
        self.name_column = name_column.into();
        self
    }

    /// Set fallback drop-frame mode
    #[must_use]
    pub fn with_drop_frame(mut self, drop_frame: bool) -> Self {
        self.drop_frame = drop_frame;
        self
    }

    /// Enable or disable strict structural parsing
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Options controlling how timelines are encoded
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    /// Frame rate of written timecodes and the `FPS` header
    pub frame_rate: f64,
    /// Write drop-frame timecode at drop-frame rates
    pub drop_frame: bool,
    /// Explicit column list; inferred from the timeline when `None` or empty
    pub columns: Option<Vec<String>>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            drop_frame: false,
            columns: None,
        }
    }
}

impl EncoderConfig {
    /// Set output frame rate
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Set drop-frame output
    #[must_use]
    pub fn with_drop_frame(mut self, drop_frame: bool) -> Self {
        self.drop_frame = drop_frame;
        self
    }

    /// Set an explicit column list
    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }
}
