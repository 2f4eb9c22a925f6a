//! Media references pointing clips at their source material

use crate::time::TimeRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where a clip's media lives
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum MediaReference {
    /// Media addressable by URL or filesystem path
    External {
        /// Display name of the reference
        name: String,
        /// URL or path of the media
        target_url: String,
        /// Range of media available at the target
        available_range: Option<TimeRange>,
    },
    /// Placeholder for media that is not known
    Missing {
        /// Display name of the reference
        name: String,
        /// Range the media would have covered
        available_range: Option<TimeRange>,
    },
}

impl MediaReference {
    /// External reference named after its target
    #[must_use]
    pub fn external(target_url: impl Into<String>) -> Self {
        let target_url = target_url.into();
        Self::External {
            name: target_url.clone(),
            target_url,
            available_range: None,
        }
    }

    /// Missing-media placeholder
    #[must_use]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing {
            name: name.into(),
            available_range: None,
        }
    }

    /// Replace the available range
    #[must_use]
    pub fn with_available_range(mut self, range: Option<TimeRange>) -> Self {
        match &mut self {
            Self::External {
                available_range, ..
            }
            | Self::Missing {
                available_range, ..
            } => *available_range = range,
        }
        self
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::External { name, .. } | Self::Missing { name, .. } => name,
        }
    }

    /// Target URL, `None` for missing media
    #[must_use]
    pub fn target_url(&self) -> Option<&str> {
        match self {
            Self::External { target_url, .. } => Some(target_url),
            Self::Missing { .. } => None,
        }
    }

    /// Range of media available at the reference
    #[must_use]
    pub const fn available_range(&self) -> Option<&TimeRange> {
        match self {
            Self::External {
                available_range, ..
            }
            | Self::Missing {
                available_range, ..
            } => available_range.as_ref(),
        }
    }

    /// Whether this is a missing-media placeholder
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

impl Default for MediaReference {
    fn default() -> Self {
        Self::missing("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::RationalTime;

    #[test]
    fn external_reference_exposes_target() {
        let media = MediaReference::external("/media/A001.mov");
        assert_eq!(media.target_url(), Some("/media/A001.mov"));
        assert_eq!(media.name(), "/media/A001.mov");
        assert!(!media.is_missing());
    }

    #[test]
    fn missing_reference_has_no_target() {
        let range = TimeRange::new(RationalTime::new(0.0, 24.0), RationalTime::new(10.0, 24.0));
        let media = MediaReference::missing("Clip 1").with_available_range(Some(range));
        assert!(media.is_missing());
        assert!(media.target_url().is_none());
        assert_eq!(media.available_range(), Some(&range));
    }
}
