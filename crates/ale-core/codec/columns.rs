//! Output column inference for the encoder

use std::collections::BTreeSet;

use ale_timeline::{MetadataValue, Timeline};

use super::{
    cdl::CdlData, COLUMN_ASC_SAT, COLUMN_ASC_SOP, COLUMN_DURATION, COLUMN_END, COLUMN_NAME,
    COLUMN_SOURCE_FILE, COLUMN_START, COLUMN_TRACKS, METADATA_ALE, METADATA_CDL,
};

/// Columns every encoded document starts with
pub const REQUIRED_COLUMNS: [&str; 4] = [COLUMN_NAME, COLUMN_START, COLUMN_END, COLUMN_DURATION];

/// Decide the output columns for a timeline
///
/// A non-empty `explicit` list is returned as is. Otherwise the required
/// columns come first, then `Tracks` if the timeline has tracks, then every
/// extra column in lexical order: `Source File` when a clip has an external
/// target, `ASC_SOP`/`ASC_SAT` when a clip carries that CDL part, and every
/// residual metadata key.
#[must_use]
pub fn infer_columns(timeline: &Timeline, explicit: Option<&[String]>) -> Vec<String> {
    if let Some(columns) = explicit.filter(|c| !c.is_empty()) {
        return columns.to_vec();
    }

    let mut columns: Vec<String> = REQUIRED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    if !timeline.video_tracks().is_empty() || !timeline.audio_tracks().is_empty() {
        columns.push(COLUMN_TRACKS.to_string());
    }

    let mut extras: BTreeSet<&str> = BTreeSet::new();
    for clip in timeline.find_clips() {
        if clip
            .media_reference()
            .target_url()
            .is_some_and(|url| !url.is_empty())
        {
            extras.insert(COLUMN_SOURCE_FILE);
        }

        let metadata = clip.metadata();
        if let Some(cdl) = metadata.get(METADATA_CDL).and_then(CdlData::from_metadata) {
            if cdl.sop.is_some() {
                extras.insert(COLUMN_ASC_SOP);
            }
            if cdl.saturation.is_some() {
                extras.insert(COLUMN_ASC_SAT);
            }
        }

        if let Some(ale) = metadata.get(METADATA_ALE).and_then(MetadataValue::as_map) {
            extras.extend(ale.keys().map(String::as_str).filter(|k| !k.is_empty()));
        }
    }

    for extra in extras {
        if !columns.iter().any(|c| c == extra) {
            columns.push(extra.to_string());
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use ale_timeline::{Clip, MediaReference, Metadata, Track, TrackKind};
    use pretty_assertions::assert_eq;

    fn timeline_with(clips: Vec<Clip>) -> Timeline {
        let mut track = Track::new("V", TrackKind::Video);
        for clip in clips {
            track.append_child(clip);
        }
        let mut timeline = Timeline::new("t");
        timeline.append_track(track);
        timeline
    }

    fn residual(pairs: &[(&str, &str)]) -> Metadata {
        let mut ale = Metadata::new();
        for (k, v) in pairs {
            ale.insert((*k).to_string(), (*v).into());
        }
        let mut metadata = Metadata::new();
        metadata.insert(METADATA_ALE.into(), ale.into());
        metadata
    }

    #[test]
    fn empty_timeline_has_required_columns_only() {
        assert_eq!(
            infer_columns(&Timeline::new("t"), None),
            vec!["Name", "Start", "End", "Duration"]
        );
    }

    #[test]
    fn extras_are_sorted_and_deduplicated() {
        let a = Clip::new("a")
            .with_media_reference(MediaReference::external("/a.mov"))
            .with_metadata(residual(&[("Scene", "1"), ("Camera", "A")]));
        let b = Clip::new("b").with_metadata(residual(&[("Scene", "2"), ("Tracks", "V")]));

        assert_eq!(
            infer_columns(&timeline_with(vec![a, b]), None),
            vec!["Name", "Start", "End", "Duration", "Tracks", "Camera", "Scene", "Source File"]
        );
    }

    #[test]
    fn cdl_columns_follow_present_parts() {
        let mut metadata = Metadata::new();
        let cdl = CdlData {
            sop: None,
            saturation: Some(0.9),
        };
        metadata.insert(METADATA_CDL.into(), cdl.to_metadata());
        let clip = Clip::new("a").with_metadata(metadata);

        let columns = infer_columns(&timeline_with(vec![clip]), None);
        assert!(columns.contains(&"ASC_SAT".to_string()));
        assert!(!columns.contains(&"ASC_SOP".to_string()));
    }

    #[test]
    fn explicit_columns_override_inference() {
        let explicit = vec!["Name".to_string(), "Tape".to_string()];
        let timeline = timeline_with(vec![Clip::new("a")]);
        assert_eq!(infer_columns(&timeline, Some(explicit.as_slice())), explicit);
        assert_eq!(infer_columns(&timeline, Some(&[][..])).len(), 5);
    }
}
