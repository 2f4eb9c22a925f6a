//! Tracks: ordered sequences of clips of one kind

use crate::clip::Clip;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of material a track carries
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrackKind {
    /// Picture track
    #[default]
    Video,
    /// Sound track
    Audio,
}

impl TrackKind {
    /// Canonical name of the kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered sequence of clips
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Track {
    /// Track name
    name: String,
    /// Kind of material
    kind: TrackKind,
    /// Clips in playback order
    children: Vec<Clip>,
}

impl Track {
    /// Create an empty track
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TrackKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Append a clip after the existing children
    pub fn append_child(&mut self, clip: Clip) {
        self.children.push(clip);
    }

    /// Track name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Track kind
    #[must_use]
    pub const fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Clips in order
    #[must_use]
    pub fn children(&self) -> &[Clip] {
        &self.children
    }

    /// Number of clips
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the track has no clips
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_keeps_order() {
        let mut track = Track::new("A1", TrackKind::Audio);
        track.append_child(Clip::new("first"));
        track.append_child(Clip::new("second"));

        let names: Vec<&str> = track.children().iter().map(Clip::name).collect();
        assert_eq!(names, ["first", "second"]);
        assert_eq!(track.kind(), TrackKind::Audio);
        assert_eq!(track.kind().to_string(), "Audio");
    }
}
