//! # ALE Core
//!
//! Reader, writer and timeline codec for Avid Log Exchange (ALE) files.
//!
//! ALE is a tab-delimited text format with three sections: `Heading`
//! key/value pairs, a `Column` declaration and `Data` rows. This crate
//! parses it into a [`ParsedFile`], converts that into an
//! [`ale_timeline::Timeline`] and back, and keeps every column it does
//! not interpret as clip metadata so a decode/encode/decode cycle is lossless.
//!
//! ## Features
//!
//! - **Tolerant parsing**: structural anomalies are collected as issues, or rejected in strict mode
//! - **Timecode codec**: non-drop and SMPTE drop-frame timecode, bare frame counts
//! - **ASC CDL**: `ASC_SOP` / `ASC_SAT` parsing into structured metadata
//! - **Track grouping**: rows grouped by their `Tracks` value into video and audio tracks
//!
//! ## Quick Start
//!
//! ```rust
//! use ale_core::{AleDecoder, AleEncoder, DecoderConfig, EncoderConfig};
//!
//! let source = "Heading\nFIELD_DELIM\tTABS\nFPS\t24.00\n\n\
//!               Column\nName\tStart\tEnd\tDuration\tScene\n\n\
//!               Data\nClip001\t01:00:00:00\t01:00:05:00\t120\t4A\n";
//!
//! let timeline = AleDecoder::new(DecoderConfig::default()).decode_str(source)?;
//! let clip = timeline.find_clips()[0];
//! assert_eq!(clip.name(), "Clip001");
//! assert_eq!(clip.source_range().map(|r| r.duration().value()), Some(120.0));
//!
//! let text = AleEncoder::new(EncoderConfig::default()).encode_to_string(Some(&timeline))?;
//! assert!(text.contains("Scene"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod codec;
pub mod parser;
pub mod utils;
pub mod writer;

pub use codec::{
    AleDecoder, AleEncoder, AleFormat, CdlData, DecoderConfig, EncoderConfig, FormatInfo,
    TimelineExporter, TimelineImporter,
};
pub use parser::{ParseError, ParseIssue, ParsedFile};
pub use utils::errors::{AleError, ErrorCategory, Result};
pub use writer::write_ale;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
