//! Timeline to ALE encoding

use std::io::Write;

use ale_timeline::{Clip, MetadataValue, Timeline};
use tracing::{debug, instrument};

use super::{
    cdl::{format_saturation, format_sop, CdlData},
    columns::infer_columns,
    config::EncoderConfig,
    timecode::{format_fps, format_frames, format_time},
    video_format::infer_video_format,
    COLUMN_ASC_SAT, COLUMN_ASC_SOP, COLUMN_DURATION, COLUMN_END, COLUMN_NAME,
    COLUMN_SOURCE_FILE, COLUMN_START, COLUMN_TAPE, COLUMN_TRACKS, DEFAULT_AUDIO_FORMAT,
    DEFAULT_TRACK_KEY, FIELD_DELIM_TABS, HEADER_AUDIO_FORMAT, HEADER_FIELD_DELIM, HEADER_FPS,
    HEADER_VIDEO_FORMAT, METADATA_ALE, METADATA_CDL,
};
use crate::{
    parser::{ParsedFile, Row},
    utils::{create_hash_map_with_capacity, AleError},
    writer::{write_ale, write_ale_to},
    Result,
};

/// Encoder from timelines to ALE text
#[derive(Debug, Clone, Default)]
pub struct AleEncoder {
    config: EncoderConfig,
}

impl AleEncoder {
    /// Create an encoder with the given options
    #[must_use]
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encoding options
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a timeline into `writer`
    ///
    /// # Errors
    ///
    /// - [`AleError::NilTimeline`] when `timeline` is `None`
    /// - [`AleError::InvalidTimecode`] when a clip range cannot be rendered
    /// - [`AleError::InvalidField`] when a value contains a tab or line break
    /// - [`AleError::StreamWrite`] when the writer fails
    pub fn encode(&self, timeline: Option<&Timeline>, writer: &mut dyn Write) -> Result<()> {
        let file = self.to_parsed_file(timeline.ok_or(AleError::NilTimeline)?)?;
        write_ale_to(&file, writer)
    }

    /// Encode a timeline to a string
    ///
    /// # Errors
    ///
    /// Same as [`AleEncoder::encode`], minus write failures.
    pub fn encode_to_string(&self, timeline: Option<&Timeline>) -> Result<String> {
        let file = self.to_parsed_file(timeline.ok_or(AleError::NilTimeline)?)?;
        Ok(write_ale(&file))
    }

    /// Build the document for a timeline without serializing it
    ///
    /// Clips from every track are written in track order. Every row carries
    /// the `V` track key.
    ///
    /// # Errors
    ///
    /// - [`AleError::InvalidTimecode`] when a clip range is negative
    /// - [`AleError::InvalidField`] when a value contains a tab or line break
    #[instrument(level = "debug", skip_all, fields(timeline = timeline.name()))]
    pub fn to_parsed_file(&self, timeline: &Timeline) -> Result<ParsedFile> {
        let clips = timeline.find_clips();
        let mut file = ParsedFile::new();

        file.headers
            .insert(HEADER_FIELD_DELIM.to_string(), FIELD_DELIM_TABS.to_string());
        file.headers.insert(
            HEADER_VIDEO_FORMAT.to_string(),
            infer_video_format(&clips).to_string(),
        );
        file.headers
            .insert(HEADER_AUDIO_FORMAT.to_string(), DEFAULT_AUDIO_FORMAT.to_string());
        file.headers
            .insert(HEADER_FPS.to_string(), format_fps(self.config.frame_rate));

        file.columns = infer_columns(timeline, self.config.columns.as_deref());
        file.rows = clips
            .iter()
            .map(|clip| self.clip_to_row(clip, &file.columns))
            .collect::<Result<_>>()?;

        debug!(
            rows = file.rows.len(),
            columns = file.columns.len(),
            "encoded timeline"
        );
        Ok(file)
    }

    /// One data row for a clip
    fn clip_to_row(&self, clip: &Clip, columns: &[String]) -> Result<Row> {
        let rate = self.config.frame_rate;
        let range = clip.trimmed_range();
        let cdl = clip.metadata().get(METADATA_CDL).and_then(CdlData::from_metadata);
        let residual = clip.metadata().get(METADATA_ALE).and_then(MetadataValue::as_map);

        let mut row = create_hash_map_with_capacity(columns.len());
        for column in columns {
            let value = match column.as_str() {
                COLUMN_NAME => clip.name().to_string(),
                COLUMN_START => match range {
                    Some(r) => format_time(&r.start_time(), rate, self.config.drop_frame)?,
                    None => String::new(),
                },
                COLUMN_END => match range {
                    Some(r) => format_time(&r.end_time_exclusive(), rate, self.config.drop_frame)?,
                    None => String::new(),
                },
                COLUMN_DURATION => range
                    .map(|r| format_frames(&r.duration(), rate))
                    .unwrap_or_default(),
                COLUMN_TRACKS => DEFAULT_TRACK_KEY.to_string(),
                COLUMN_SOURCE_FILE | COLUMN_TAPE => clip
                    .media_reference()
                    .target_url()
                    .unwrap_or_default()
                    .to_string(),
                COLUMN_ASC_SOP => cdl
                    .as_ref()
                    .and_then(|c| c.sop.as_ref())
                    .map(format_sop)
                    .unwrap_or_default(),
                COLUMN_ASC_SAT => cdl
                    .as_ref()
                    .and_then(|c| c.saturation)
                    .map(format_saturation)
                    .unwrap_or_default(),
                other => residual
                    .and_then(|ale| ale.get(other))
                    .map(|v| match v {
                        MetadataValue::String(s) => s.clone(),
                        v => v.to_string(),
                    })
                    .unwrap_or_default(),
            };
            check_field(column, &value)?;
            row.insert(column.clone(), value);
        }
        Ok(row)
    }
}

/// Reject values that would split a row or a field on output
fn check_field(column: &str, value: &str) -> Result<()> {
    if value.contains('\t') {
        return Err(AleError::invalid_field(column, "value contains a tab"));
    }
    if value.contains(['\n', '\r']) {
        return Err(AleError::invalid_field(column, "value contains a line break"));
    }
    Ok(())
}
