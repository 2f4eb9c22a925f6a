//! ALE to timeline decoding
//!
//! Turns a parsed document into a [`Timeline`]: each data row becomes a
//! [`Clip`] carrying its name, source range, media reference, CDL values and
//! every unmapped column as residual metadata. Rows are grouped into tracks
//! by their `Tracks` value when that column exists.

use std::io::Read;

use ale_timeline::{
    Clip, MediaReference, Metadata, MetadataValue, RationalTime, TimeRange, Timeline, Track,
    TrackKind,
};
use tracing::{debug, instrument, trace, warn};

use super::{
    cdl::parse_cdl_detailed,
    config::DecoderConfig,
    timecode::{is_drop_frame_rate, parse_fps, parse_frames, parse_time, parse_timecode},
    tracks::{classify, sort_track_keys, TrackKey},
    COLUMN_ASC_SAT, COLUMN_ASC_SOP, COLUMN_DURATION, COLUMN_END, COLUMN_SOURCE_FILE,
    COLUMN_START, COLUMN_TAPE, COLUMN_TRACKS, DEFAULT_TIMELINE_NAME, DEFAULT_TRACK_NAME,
    HEADER_FPS, METADATA_ALE, METADATA_CDL,
};
use crate::{
    parser::{self, IssueCategory, ParseIssue, ParsedFile, Row},
    utils::{create_hash_map, AleError},
    Result,
};

/// Columns mapped to structural clip fields, never copied to residual metadata
const STRUCTURAL_COLUMNS: [&str; 8] = [
    COLUMN_START,
    COLUMN_END,
    COLUMN_DURATION,
    COLUMN_SOURCE_FILE,
    COLUMN_TAPE,
    COLUMN_ASC_SOP,
    COLUMN_ASC_SAT,
    COLUMN_TRACKS,
];

/// Rate and drop-frame mode in effect for one document
#[derive(Debug, Clone, Copy)]
struct Timing {
    /// Frames per second
    rate: f64,
    /// Whether timecodes count in drop-frame
    drop_frame: bool,
}

/// Decoder from ALE text to timelines
#[derive(Debug, Clone, Default)]
pub struct AleDecoder {
    /// Decoding options
    config: DecoderConfig,
}

impl AleDecoder {
    /// Create a decoder with the given options
    #[must_use]
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Decoding options
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Read a whole document from `reader` and decode it
    ///
    /// # Errors
    ///
    /// Returns [`AleError::StreamRead`] if reading fails, otherwise the errors
    /// of [`AleDecoder::decode_with_issues`].
    pub fn decode(&self, reader: &mut dyn Read) -> Result<Timeline> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.decode_str(&text)
    }

    /// Decode a document held in memory
    ///
    /// # Errors
    ///
    /// See [`AleDecoder::decode_with_issues`].
    pub fn decode_str(&self, text: &str) -> Result<Timeline> {
        self.decode_with_issues(text).map(|(timeline, _)| timeline)
    }

    /// Decode a document and return the issues tolerated on the way
    ///
    /// # Errors
    ///
    /// - [`AleError::Parse`] in strict mode when the layout has blocking issues
    /// - [`AleError::EmptyInput`] when there are no data rows
    /// - [`AleError::InvalidTimecode`] when a start, end or duration field is bad
    /// - [`AleError::InvalidCdl`] in strict mode when a CDL field is bad
    #[instrument(level = "debug", skip_all, fields(strict = self.config.strict))]
    pub fn decode_with_issues(&self, text: &str) -> Result<(Timeline, Vec<ParseIssue>)> {
        let (file, mut issues) = parser::parse_with(text, self.config.strict).into_parts()?;
        if file.rows.is_empty() {
            return Err(AleError::EmptyInput);
        }

        let timing = self.resolve_timing(&file, &mut issues);
        debug!(
            rows = file.rows.len(),
            columns = file.columns.len(),
            rate = timing.rate,
            drop_frame = timing.drop_frame,
            "decoding ALE rows"
        );

        let mut timeline = Timeline::new(DEFAULT_TIMELINE_NAME);
        if file.has_column(COLUMN_TRACKS) {
            for track in self.grouped_tracks(&file, timing, &mut issues)? {
                timeline.append_track(track);
            }
        } else {
            let mut track = Track::new(DEFAULT_TRACK_NAME, TrackKind::Video);
            for (index, row) in file.rows.iter().enumerate() {
                track.append_child(self.row_to_clip(&file, row, index, timing, &mut issues)?);
            }
            timeline.append_track(track);
        }

        Ok((timeline, issues))
    }

    /// Effective rate: a valid `FPS` header wins over the configuration
    fn resolve_timing(&self, file: &ParsedFile, issues: &mut Vec<ParseIssue>) -> Timing {
        let configured = Timing {
            rate: self.config.frame_rate,
            drop_frame: self.config.drop_frame,
        };

        let Some(value) = file.header(HEADER_FPS).filter(|v| !v.trim().is_empty()) else {
            return configured;
        };

        match parse_fps(value) {
            Ok(rate) => Timing {
                rate,
                drop_frame: is_drop_frame_rate(rate),
            },
            Err(error) => {
                warn!(%error, fallback = configured.rate, "ignoring unusable FPS header");
                issues.push(ParseIssue::info(
                    IssueCategory::Heading,
                    format!("FPS header '{value}' is unusable; using {}", configured.rate),
                    0,
                ));
                configured
            }
        }
    }

    /// Group clips by Tracks value, tracks in key order
    fn grouped_tracks(
        &self,
        file: &ParsedFile,
        timing: Timing,
        issues: &mut Vec<ParseIssue>,
    ) -> Result<Vec<Track>> {
        let mut by_label = create_hash_map::<String, Track>();
        let mut keys: Vec<TrackKey> = Vec::new();

        for (index, row) in file.rows.iter().enumerate() {
            let clip = self.row_to_clip(file, row, index, timing, issues)?;
            let (kind, key) = classify(ParsedFile::value(row, COLUMN_TRACKS));

            let track = by_label.entry(key.label().to_string()).or_insert_with(|| {
                keys.push(key.clone());
                Track::new(key.label(), kind)
            });
            track.append_child(clip);
        }

        sort_track_keys(&mut keys);
        trace!(tracks = keys.len(), "grouped rows into tracks");
        Ok(keys
            .iter()
            .filter_map(|key| by_label.remove(key.label()))
            .collect())
    }

    /// Build one clip from a row
    fn row_to_clip(
        &self,
        file: &ParsedFile,
        row: &Row,
        index: usize,
        timing: Timing,
        issues: &mut Vec<ParseIssue>,
    ) -> Result<Clip> {
        let line = file.row_line(index);
        let name = match ParsedFile::value(row, &self.config.name_column) {
            "" => format!("Clip {}", index + 1),
            name => name.to_string(),
        };

        let source_range = source_range(row, timing.rate)
            .map_err(|e| with_row_context(e, index + 1))?;

        let media_target = match ParsedFile::value(row, COLUMN_SOURCE_FILE) {
            "" => ParsedFile::value(row, COLUMN_TAPE),
            path => path,
        };
        let media_reference = if media_target.is_empty() {
            MediaReference::missing(name.as_str())
        } else {
            MediaReference::external(media_target)
        }
        .with_available_range(source_range);

        let mut metadata = Metadata::new();

        let (cdl, cdl_errors) = parse_cdl_detailed(
            ParsedFile::value(row, COLUMN_ASC_SOP),
            ParsedFile::value(row, COLUMN_ASC_SAT),
        );
        for error in cdl_errors {
            if self.config.strict {
                return Err(error);
            }
            warn!(%error, row = index + 1, "dropping unparseable CDL value");
            issues.push(ParseIssue::warning(IssueCategory::Color, error.to_string(), line));
        }
        if let Some(cdl) = cdl {
            metadata.insert(METADATA_CDL.to_string(), cdl.to_metadata());
        }

        let mut residual = Metadata::new();
        for (column, value) in row {
            if value.is_empty()
                || *column == self.config.name_column
                || STRUCTURAL_COLUMNS.contains(&column.as_str())
            {
                continue;
            }
            residual.insert(column.clone(), MetadataValue::String(value.clone()));
        }
        if !residual.is_empty() {
            metadata.insert(METADATA_ALE.to_string(), MetadataValue::Map(residual));
        }

        trace!(row = index + 1, name = %name, "decoded clip");

        let mut clip = Clip::new(name)
            .with_media_reference(media_reference)
            .with_metadata(metadata);
        if let Some(range) = source_range {
            clip = clip.with_source_range(range);
        }
        Ok(clip)
    }
}

/// Source range from Start/End, or Duration with an optional Start
fn source_range(row: &Row, rate: f64) -> Result<Option<TimeRange>> {
    let start = ParsedFile::value(row, COLUMN_START);
    let end = ParsedFile::value(row, COLUMN_END);
    let duration = ParsedFile::value(row, COLUMN_DURATION);

    if !start.is_empty() && !end.is_empty() {
        let start_time = parse_time(start, rate)?;
        let end_time = parse_time(end, rate)?;
        if end_time.value() < start_time.value() {
            return Err(AleError::invalid_timecode(end, "end precedes start"));
        }
        let length = RationalTime::duration_from_start_end_time(&start_time, &end_time);
        return Ok(Some(TimeRange::new(start_time, length)));
    }

    if duration.is_empty() {
        return Ok(None);
    }

    let length = parse_frames(duration, rate)
        .or_else(|_| parse_timecode(duration, rate))
        .map_err(|_| {
            AleError::invalid_timecode(duration, "duration is neither a frame count nor a timecode")
        })?;
    let start_time = if start.is_empty() {
        RationalTime::new(0.0, rate)
    } else {
        parse_time(start, rate)?
    };
    Ok(Some(TimeRange::new(start_time, length)))
}

/// Prefix timecode errors with the 1-based row they came from
fn with_row_context(error: AleError, row: usize) -> AleError {
    match error {
        AleError::InvalidTimecode { value, reason } => AleError::InvalidTimecode {
            value,
            reason: format!("row {row}: {reason}"),
        },
        other => other,
    }
}
