//! # ALE Timeline
//!
//! Minimal editorial timeline object model populated and read by `ale-core`.
//!
//! The model is intentionally small: a [`Timeline`] owns an ordered list of
//! [`Track`]s, each track owns an ordered list of [`Clip`]s, and each clip
//! carries an optional source [`TimeRange`], a [`MediaReference`] and a
//! string-keyed [`Metadata`] tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use ale_timeline::{Clip, MediaReference, RationalTime, TimeRange, Timeline, Track, TrackKind};
//!
//! let range = TimeRange::new(RationalTime::new(0.0, 24.0), RationalTime::new(48.0, 24.0));
//! let clip = Clip::new("A001C003")
//!     .with_source_range(range)
//!     .with_media_reference(MediaReference::external("/media/A001C003.mov"));
//!
//! let mut track = Track::new("V", TrackKind::Video);
//! track.append_child(clip);
//!
//! let mut timeline = Timeline::new("Dailies");
//! timeline.append_track(track);
//!
//! assert_eq!(timeline.find_clips().len(), 1);
//! ```

#![deny(unsafe_code)]

pub mod clip;
pub mod media;
pub mod metadata;
pub mod time;
pub mod timeline;
pub mod track;

pub use clip::Clip;
pub use media::MediaReference;
pub use metadata::{Metadata, MetadataValue};
pub use time::{RationalTime, TimeRange};
pub use timeline::Timeline;
pub use track::{Track, TrackKind};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
