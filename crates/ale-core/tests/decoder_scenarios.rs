//! Decoding behaviour on realistic ALE documents

mod common;

use ale_core::{
    codec::{CdlData, TrackKey},
    AleDecoder, AleError, DecoderConfig,
};
use ale_timeline::{MetadataValue, TrackKind};
use common::{ale_document, cdl, init_logging, residual};
use pretty_assertions::assert_eq;

#[test]
fn single_clip_at_24fps() {
    init_logging();
    let text = ale_document(
        &[("FPS", "24.00")],
        &["Name", "Start", "End", "Duration"],
        &[&["Clip001", "01:00:00:00", "01:00:05:00", "120"]],
    );

    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    assert_eq!(timeline.name(), "ALE Timeline");
    assert_eq!(timeline.tracks().len(), 1);
    assert_eq!(timeline.tracks()[0].name(), "Video");

    let clips = timeline.find_clips();
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0].name(), "Clip001");

    let range = clips[0].source_range().copied().unwrap();
    assert_eq!(range.start_time().value(), 86_400.0);
    assert_eq!(range.start_time().rate(), 24.0);
    assert_eq!(range.duration().value(), 120.0);
    assert!(residual(clips[0]).is_empty());
}

#[test]
fn zero_rows_is_empty_input() {
    init_logging();
    let text = ale_document(&[("FPS", "24.00")], &["Name", "Start"], &[]);
    assert_eq!(AleDecoder::default().decode_str(&text), Err(AleError::EmptyInput));
    assert_eq!(AleDecoder::default().decode_str(""), Err(AleError::EmptyInput));
}

#[test]
fn cdl_columns_become_structured_metadata() {
    init_logging();
    let text = ale_document(
        &[("FPS", "24.00")],
        &["Name", "Start", "End", "ASC_SOP", "ASC_SAT"],
        &[&[
            "A001",
            "01:00:00:00",
            "01:00:01:00",
            "(0.87 0.93 0.99)(-0.08 -0.09 -0.08)(0.99 1.02 1.01)",
            "0.9",
        ]],
    );

    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    let clip = timeline.find_clips()[0];
    let data = cdl(clip).and_then(CdlData::from_metadata).unwrap();

    assert_eq!(data.saturation, Some(0.9));
    let sop = data.sop.unwrap();
    assert_eq!(sop.slope, [0.87, 0.93, 0.99]);
    assert_eq!(sop.offset, [-0.08, -0.09, -0.08]);
    assert_eq!(sop.power, [0.99, 1.02, 1.01]);
    assert!(residual(clip).get("ASC_SOP").is_none());
}

#[test]
fn saturation_alone_is_kept() {
    let text = ale_document(&[], &["Name", "ASC_SOP", "ASC_SAT"], &[&["A", "", "1.2"]]);
    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    let data = cdl(timeline.find_clips()[0]).and_then(CdlData::from_metadata).unwrap();
    assert!(data.sop.is_none());
    assert_eq!(data.saturation, Some(1.2));
}

#[test]
fn tracks_are_grouped_and_ordered() {
    init_logging();
    let text = ale_document(
        &[("FPS", "25")],
        &["Name", "Tracks", "Duration"],
        &[
            &["a", "V2", "10"],
            &["b", "A1", "10"],
            &["c", "VA1", "10"],
            &["d", "V2", "10"],
            &["e", "", "10"],
        ],
    );

    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    let names: Vec<&str> = timeline.tracks().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["VA1", "V", "V2", "A1"]);

    let kinds: Vec<TrackKind> = timeline.tracks().iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        [TrackKind::Video, TrackKind::Video, TrackKind::Video, TrackKind::Audio]
    );

    let v2: Vec<&str> = timeline.tracks()[2].children().iter().map(|c| c.name()).collect();
    assert_eq!(v2, ["a", "d"]);
    assert_eq!(timeline.audio_tracks().len(), 1);
}

#[test]
fn combined_key_sorts_before_video_only() {
    assert!(TrackKey::new("VA1") < TrackKey::new("V2"));
    assert!(TrackKey::new("V2") < TrackKey::new("A1"));
}

#[test]
fn names_are_synthesized_for_blank_rows() {
    let text = ale_document(&[], &["Name", "Scene"], &[&["", "1"], &["Named", "2"], &["", "3"]]);
    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    let names: Vec<&str> = timeline.find_clips().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["Clip 1", "Named", "Clip 3"]);
}

#[test]
fn residual_columns_keep_raw_text() {
    let text = ale_document(
        &[],
        &["Name", "Start", "End", "Scene", "Take", "Camroll", "Tape"],
        &[&["A", "01:00:00:00", "01:00:01:00", "007", "1.50", "", "TAPE01"]],
    );
    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    let clip = timeline.find_clips()[0];
    let ale = residual(clip);

    let keys: Vec<&str> = ale.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Scene", "Take"]);
    assert_eq!(ale["Scene"], MetadataValue::from("007"));
    assert_eq!(ale["Take"], MetadataValue::from("1.50"));
    assert_eq!(clip.media_reference().target_url(), Some("TAPE01"));
}

#[test]
fn drop_frame_detected_from_header() {
    let text = ale_document(
        &[("FPS", "29.97")],
        &["Name", "Start", "End"],
        &[&["A", "00:01:00;02", "00:01:01;02"]],
    );
    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    let range = timeline.find_clips()[0].source_range().copied().unwrap();
    assert_eq!(range.start_time().value(), 1_800.0);
    assert_eq!(range.duration().value(), 30.0);
}

#[test]
fn missing_fps_uses_configured_rate() {
    let text = ale_document(&[], &["Name", "Duration"], &[&["A", "50"]]);
    let decoder = AleDecoder::new(DecoderConfig::default().with_frame_rate(50.0));
    let timeline = decoder.decode_str(&text).unwrap();
    let range = timeline.find_clips()[0].source_range().copied().unwrap();
    assert_eq!(range.duration().rate(), 50.0);
    assert_eq!(range.duration().to_seconds(), 1.0);
}

#[test]
fn empty_fps_header_is_ignored() {
    let text = ale_document(&[("FPS", "")], &["Name", "Duration"], &[&["A", "25"]]);
    let decoder = AleDecoder::new(DecoderConfig::default().with_frame_rate(25.0));
    let (timeline, _) = decoder.decode_with_issues(&text).unwrap();
    let range = timeline.find_clips()[0].source_range().copied().unwrap();
    assert_eq!(range.duration().rate(), 25.0);
}

#[test]
fn unparseable_duration_fails() {
    let text = ale_document(&[], &["Name", "Duration"], &[&["A", "forever"]]);
    let err = AleDecoder::default().decode_str(&text).unwrap_err();
    assert!(matches!(err, AleError::InvalidTimecode { ref value, .. } if value == "forever"));
}

#[test]
fn available_range_mirrors_source_range() {
    let text = ale_document(
        &[],
        &["Name", "Start", "End", "Source File"],
        &[&["A", "00:00:10:00", "00:00:20:00", "/media/a.mxf"]],
    );
    let timeline = AleDecoder::default().decode_str(&text).unwrap();
    let clip = timeline.find_clips()[0];
    assert_eq!(clip.media_reference().available_range(), clip.source_range());
}

#[test]
fn decode_from_reader() {
    let text = ale_document(&[], &["Name"], &[&["A"], &["B"]]);
    let mut reader = text.as_bytes();
    let timeline = AleDecoder::default().decode(&mut reader).unwrap();
    assert_eq!(timeline.find_clips().len(), 2);
}
