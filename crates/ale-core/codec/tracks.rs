//! Track classification from the `Tracks` column
//!
//! A Tracks value such as `V`, `A1`, `VA1` or `V2` names the track a row
//! belongs to. The raw (trimmed) value is the grouping key; its letters decide
//! the track kind and the output order of tracks.

use core::cmp::Ordering;

use ale_timeline::TrackKind;
use bitflags::bitflags;

use super::DEFAULT_TRACK_KEY;

bitflags! {
    /// Media carried by a track descriptor
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrackFlags: u8 {
        /// Descriptor mentions video (`V`)
        const VIDEO = 1 << 0;
        /// Descriptor mentions audio (`A`)
        const AUDIO = 1 << 1;
    }
}

impl TrackFlags {
    /// Flags for a descriptor, matched case-insensitively
    #[must_use]
    pub fn from_descriptor(value: &str) -> Self {
        let upper = value.trim().to_uppercase();
        let mut flags = Self::empty();
        if upper.contains('V') {
            flags |= Self::VIDEO;
        }
        if upper.contains('A') {
            flags |= Self::AUDIO;
        }
        flags
    }

    /// Both video and audio
    #[must_use]
    pub const fn is_combined(self) -> bool {
        self.contains(Self::VIDEO.union(Self::AUDIO))
    }

    /// Track kind: audio only when audio is the sole medium
    #[must_use]
    pub const fn kind(self) -> TrackKind {
        if self.contains(Self::AUDIO) && !self.contains(Self::VIDEO) {
            TrackKind::Audio
        } else {
            TrackKind::Video
        }
    }

    /// Sort group: combined first, then video (and unlabeled), then audio
    const fn rank(self) -> u8 {
        if self.is_combined() {
            0
        } else if self.contains(Self::AUDIO) {
            2
        } else {
            1
        }
    }
}

/// Grouping key for decoded tracks
///
/// Ordered combined < video-only < audio-only, then lexically by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackKey {
    /// Trimmed, case-preserved Tracks value
    label: String,
    /// Media flags derived from the label
    flags: TrackFlags,
}

impl TrackKey {
    /// Key for a raw Tracks value; blank values fall back to `V`
    #[must_use]
    pub fn new(value: &str) -> Self {
        let trimmed = value.trim();
        let label = if trimmed.is_empty() {
            DEFAULT_TRACK_KEY
        } else {
            trimmed
        };
        Self {
            label: label.to_string(),
            flags: TrackFlags::from_descriptor(label),
        }
    }

    /// Track label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Media flags
    #[must_use]
    pub const fn flags(&self) -> TrackFlags {
        self.flags
    }

    /// Track kind
    #[must_use]
    pub const fn kind(&self) -> TrackKind {
        self.flags.kind()
    }
}

impl Ord for TrackKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.flags
            .rank()
            .cmp(&other.flags.rank())
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl PartialOrd for TrackKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Classify a Tracks value into its kind and sort key
#[must_use]
pub fn classify(value: &str) -> (TrackKind, TrackKey) {
    let key = TrackKey::new(value);
    (key.kind(), key)
}

/// Sort keys into output track order
pub fn sort_track_keys(keys: &mut [TrackKey]) {
    keys.sort();
}
