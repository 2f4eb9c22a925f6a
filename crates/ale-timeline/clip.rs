//! Clips: named segments of media with a source range and metadata

use crate::{media::MediaReference, metadata::Metadata, time::TimeRange};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A segment of media placed on a track
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Clip {
    /// Clip name
    name: String,
    /// Portion of the media used by the clip
    source_range: Option<TimeRange>,
    /// Media the clip refers to
    media_reference: MediaReference,
    /// Arbitrary metadata
    metadata: Metadata,
}

impl Clip {
    /// Create a clip with a missing media reference and no range
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the source range
    #[must_use]
    pub fn with_source_range(mut self, range: TimeRange) -> Self {
        self.source_range = Some(range);
        self
    }

    /// Set the media reference
    #[must_use]
    pub fn with_media_reference(mut self, media_reference: MediaReference) -> Self {
        self.media_reference = media_reference;
        self
    }

    /// Replace the metadata dictionary
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Clip name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source range, if one was set
    #[must_use]
    pub const fn source_range(&self) -> Option<&TimeRange> {
        self.source_range.as_ref()
    }

    /// Media reference
    #[must_use]
    pub const fn media_reference(&self) -> &MediaReference {
        &self.media_reference
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

    /// Source range, falling back to the media's available range
    #[must_use]
    pub fn trimmed_range(&self) -> Option<&TimeRange> {
        self.source_range
            .as_ref()
            .or_else(|| self.media_reference.available_range())
    }
}
