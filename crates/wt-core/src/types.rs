//! Core type definitions with validation.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for schedule types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The hour was outside 0..=23.
    #[error("hour must be between 0 and 23, got {value}")]
    HourOutOfRange { value: u32 },

    /// The minute was outside 0..=59.
    #[error("minute must be between 0 and 59, got {value}")]
    MinuteOutOfRange { value: u32 },

    /// Text could not be read as `HH:MM`.
    #[error("invalid time of day {value:?}, expected HH:MM")]
    InvalidTimeOfDay { value: String },

    /// A work block that does not start before it ends.
    #[error("work block {start}-{end} must start before it ends")]
    EmptyBlock { start: TimeOfDay, end: TimeOfDay },

    /// A work block that starts before the previous one has ended.
    #[error("work block {start}-{end} starts before the previous block ends at {previous_end}")]
    OverlappingBlocks {
        start: TimeOfDay,
        end: TimeOfDay,
        previous_end: TimeOfDay,
    },
}

/// A wall-clock time with minute resolution, independent of any date.
///
/// Serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Creates a time of day after validating the hour and minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::HourOutOfRange { value: hour });
        }
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange { value: minute });
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(ValidationError::HourOutOfRange { value: hour })
    }

    /// Builds a constant known to be in range.
    pub(crate) fn hm(hour: u32, minute: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN))
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    /// Returns the equivalent `NaiveTime`.
    #[must_use]
    pub const fn as_naive_time(self) -> NaiveTime {
        self.0
    }

    /// Pins this time of day to a calendar date.
    #[must_use]
    pub fn on(self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTimeOfDay {
            value: s.to_string(),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty()
            || hour.len() > 2
            || minute.len() != 2
            || !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour = hour.parse().map_err(|_| invalid())?;
        let minute = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// A daily interval `[start, end)` during which elapsed time counts as work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkBlock {
    pub(crate) start: TimeOfDay,
    pub(crate) end: TimeOfDay,
}

impl WorkBlock {
    /// Creates a block, rejecting empty or inverted intervals.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, ValidationError> {
        let block = Self { start, end };
        block.validate()?;
        Ok(block)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.start >= self.end {
            return Err(ValidationError::EmptyBlock {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn start(&self) -> TimeOfDay {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Length of the block.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.end.as_naive_time() - self.start.as_naive_time()
    }

    /// Whether a wall-clock time falls inside the block (start inclusive, end exclusive).
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start.as_naive_time() <= time && time < self.end.as_naive_time()
    }

    /// The block's start and end instants on a given day.
    #[must_use]
    pub fn bounds_on(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (self.start.on(day), self.end.on(day))
    }
}

impl fmt::Display for WorkBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
