//! Avid `VIDEO_FORMAT` inference from frame dimensions

use ale_timeline::{Clip, MetadataValue};

use super::{COLUMN_IMAGE_SIZE, DEFAULT_VIDEO_FORMAT, METADATA_ALE};

/// Parse an `Image Size` value such as `1920 x 1080` or `1920X1080`
#[must_use]
pub fn parse_image_size(text: &str) -> Option<(u32, u32)> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let (width, height) = compact.split_once(['x', 'X'])?;
    Some((width.parse().ok()?, height.parse().ok()?))
}

/// Avid video format name for a frame size
#[must_use]
pub const fn video_format_from_dimensions(width: u32, height: u32) -> &'static str {
    match height {
        1080 if width > 1920 => "CUSTOM",
        1080 => "1080",
        720 => "720",
        576 => "PAL",
        486 => "NTSC",
        _ => "CUSTOM",
    }
}

/// Video format of the tallest `Image Size` among the clips' residual metadata
///
/// Falls back to `1080` when no clip carries a parseable size.
#[must_use]
pub fn infer_video_format(clips: &[&Clip]) -> &'static str {
    let mut tallest: Option<(u32, u32)> = None;

    for clip in clips {
        let size = clip
            .metadata()
            .get(METADATA_ALE)
            .and_then(MetadataValue::as_map)
            .and_then(|ale| ale.get(COLUMN_IMAGE_SIZE))
            .and_then(MetadataValue::as_str)
            .and_then(parse_image_size);

        if let Some((width, height)) = size {
            if height > tallest.map_or(0, |(_, h)| h) {
                tallest = Some((width, height));
            }
        }
    }

    tallest.map_or(DEFAULT_VIDEO_FORMAT, |(w, h)| video_format_from_dimensions(w, h))
}
