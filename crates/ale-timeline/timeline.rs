//! Timeline: the root of the object model

use crate::{
    clip::Clip,
    metadata::Metadata,
    track::{Track, TrackKind},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named, ordered stack of tracks
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Timeline {
    /// Timeline name
    name: String,
    /// Tracks in stacking order
    tracks: Vec<Track>,
    /// Arbitrary metadata
    metadata: Metadata,
}

impl Timeline {
    /// Create an empty timeline
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Timeline name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a track on top of the existing ones
    pub fn append_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// All tracks in order
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Video tracks in order
    #[must_use]
    pub fn video_tracks(&self) -> Vec<&Track> {
        self.tracks_of_kind(TrackKind::Video)
    }

    /// Audio tracks in order
    #[must_use]
    pub fn audio_tracks(&self) -> Vec<&Track> {
        self.tracks_of_kind(TrackKind::Audio)
    }

    /// Every clip on every track, track by track
    #[must_use]
    pub fn find_clips(&self) -> Vec<&Clip> {
        self.tracks.iter().flat_map(Track::children).collect()
    }

    /// Metadata dictionary
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Mutable metadata dictionary
    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    fn tracks_of_kind(&self, kind: TrackKind) -> Vec<&Track> {
        self.tracks.iter().filter(|t| t.kind() == kind).collect()
    }
}
