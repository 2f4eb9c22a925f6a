//! Rational time values and time ranges
//!
//! A [`RationalTime`] is a frame-count `value` at a frame `rate`. Values may be
//! fractional; conversions between rates are plain rescaling and never round.

use core::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in time expressed as a count of frames at a given rate
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RationalTime {
    /// Frame count (may be fractional)
    value: f64,
    /// Frames per second
    rate: f64,
}

impl RationalTime {
    /// Create a time of `value` frames at `rate` frames per second
    #[must_use]
    pub const fn new(value: f64, rate: f64) -> Self {
        Self { value, rate }
    }

    /// Create a time from a frame count
    #[must_use]
    pub const fn from_frames(frames: f64, rate: f64) -> Self {
        Self::new(frames, rate)
    }

    /// Frame count at this time's own rate
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Rate in frames per second
    #[must_use]
    pub const fn rate(&self) -> f64 {
        self.rate
    }

    /// Frame count this time would have at `rate`
    #[must_use]
    pub fn value_rescaled_to(&self, rate: f64) -> f64 {
        if (rate - self.rate).abs() < f64::EPSILON {
            return self.value;
        }
        self.value * rate / self.rate
    }

    /// Same instant expressed at `rate`
    #[must_use]
    pub fn rescaled_to(&self, rate: f64) -> Self {
        Self::new(self.value_rescaled_to(rate), rate)
    }

    /// Whole frame count at `rate`, rounded to the nearest frame
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn to_frames(&self, rate: f64) -> i64 {
        self.value_rescaled_to(rate).round() as i64
    }

    /// Time in seconds
    #[must_use]
    pub fn to_seconds(&self) -> f64 {
        self.value / self.rate
    }

    /// Whether this time lies before zero
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    /// Compare with `other` after rescaling it to this time's rate
    ///
    /// Returns `true` when the frame counts differ by at most `delta`.
    #[must_use]
    pub fn almost_equal(&self, other: &Self, delta: f64) -> bool {
        (self.value - other.value_rescaled_to(self.rate)).abs() <= delta
    }

    /// Duration between `start` and the exclusive `end`, at `start`'s rate
    #[must_use]
    pub fn duration_from_start_end_time(start: &Self, end: &Self) -> Self {
        Self::new(end.value_rescaled_to(start.rate) - start.value, start.rate)
    }
}

impl Default for RationalTime {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Add for RationalTime {
    type Output = Self;

    /// Result is expressed at the left-hand side's rate
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value_rescaled_to(self.rate), self.rate)
    }
}

impl Sub for RationalTime {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value_rescaled_to(self.rate), self.rate)
    }
}

/// A span of time given by a start instant and a duration
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeRange {
    /// First instant covered by the range
    start_time: RationalTime,
    /// Length of the range
    duration: RationalTime,
}

impl TimeRange {
    /// Create a range from a start instant and a duration
    #[must_use]
    pub const fn new(start_time: RationalTime, duration: RationalTime) -> Self {
        Self {
            start_time,
            duration,
        }
    }

    /// Start instant
    #[must_use]
    pub const fn start_time(&self) -> RationalTime {
        self.start_time
    }

    /// Duration of the range
    #[must_use]
    pub const fn duration(&self) -> RationalTime {
        self.duration
    }

    /// First instant after the range
    #[must_use]
    pub fn end_time_exclusive(&self) -> RationalTime {
        self.start_time + self.duration
    }
}
