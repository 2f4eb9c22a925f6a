//! Conversion between ALE documents and the editorial timeline model
//!
//! Leaf codecs (timecode, CDL, track classification, video format) are
//! composed by [`AleDecoder`] and [`AleEncoder`].
//!
//! # Example
//!
//! ```rust
//! use ale_core::codec::{AleDecoder, AleEncoder, DecoderConfig, EncoderConfig};
//!
//! let source = "Heading\nFPS\t24.00\n\nColumn\nName\tStart\tEnd\tDuration\n\nData\nClip001\t01:00:00:00\t01:00:05:00\t120\n";
//!
//! let timeline = AleDecoder::new(DecoderConfig::default()).decode_str(source)?;
//! let clips = timeline.find_clips();
//! assert_eq!(clips[0].name(), "Clip001");
//!
//! let text = AleEncoder::new(EncoderConfig::default()).encode_to_string(Some(&timeline))?;
//! assert!(text.contains("Clip001\t01:00:00:00\t01:00:05:00\t120"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cdl;
pub mod columns;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod format;
pub mod timecode;
pub mod tracks;
pub mod video_format;

pub use cdl::{CdlData, SopValues};
pub use config::{DecoderConfig, EncoderConfig};
pub use decoder::AleDecoder;
pub use encoder::AleEncoder;
pub use format::{AleFormat, FormatInfo, TimelineExporter, TimelineImporter};
pub use tracks::{TrackFlags, TrackKey};

/// Section marker introducing header lines
pub const SECTION_HEADING: &str = "Heading";
/// Section marker introducing the column declaration
pub const SECTION_COLUMN: &str = "Column";
/// Section marker introducing data rows
pub const SECTION_DATA: &str = "Data";

/// Clip name column
pub const COLUMN_NAME: &str = "Name";
/// Track descriptor column
pub const COLUMN_TRACKS: &str = "Tracks";
/// Start timecode column
pub const COLUMN_START: &str = "Start";
/// End timecode column (exclusive)
pub const COLUMN_END: &str = "End";
/// Duration column, in frames
pub const COLUMN_DURATION: &str = "Duration";
/// Tape name column, fallback media reference
pub const COLUMN_TAPE: &str = "Tape";
/// Media path column
pub const COLUMN_SOURCE_FILE: &str = "Source File";
/// ASC slope/offset/power column
pub const COLUMN_ASC_SOP: &str = "ASC_SOP";
/// ASC saturation column
pub const COLUMN_ASC_SAT: &str = "ASC_SAT";
/// Residual column carrying frame size, used to infer the video format
pub const COLUMN_IMAGE_SIZE: &str = "Image Size";

/// Field delimiter header
pub const HEADER_FIELD_DELIM: &str = "FIELD_DELIM";
/// Video format header
pub const HEADER_VIDEO_FORMAT: &str = "VIDEO_FORMAT";
/// Audio format header
pub const HEADER_AUDIO_FORMAT: &str = "AUDIO_FORMAT";
/// Frame rate header
pub const HEADER_FPS: &str = "FPS";

/// The only supported field delimiter
pub const FIELD_DELIM_TABS: &str = "TABS";
/// Audio format written on encode
pub const DEFAULT_AUDIO_FORMAT: &str = "48kHz";
/// Video format written when no frame size is known
pub const DEFAULT_VIDEO_FORMAT: &str = "1080";
/// Frame rate used when neither configuration nor header gives one
pub const DEFAULT_FRAME_RATE: f64 = 24.0;
/// Name of decoded timelines
pub const DEFAULT_TIMELINE_NAME: &str = "ALE Timeline";
/// Track name used when the document has no Tracks column
pub const DEFAULT_TRACK_NAME: &str = "Video";
/// Track key used for rows with an empty Tracks value
pub const DEFAULT_TRACK_KEY: &str = "V";

/// Clip metadata key holding residual columns
pub const METADATA_ALE: &str = "ALE";
/// Clip metadata key holding structured CDL values
pub const METADATA_CDL: &str = "cdl";
