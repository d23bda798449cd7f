//! Helpers for presenting and reading work durations.

use std::fmt;

use chrono::Duration;
use serde::Serialize;

/// An absolute duration split into days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DurationParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl DurationParts {
    /// Splits the absolute value of `duration`, dropping sub-second precision.
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        let total_seconds = duration.num_seconds().abs();
        let total_minutes = total_seconds / 60;
        let total_hours = total_minutes / 60;
        Self {
            days: total_hours / 24,
            hours: total_hours % 24,
            minutes: total_minutes % 60,
            seconds: total_seconds % 60,
        }
    }
}

impl From<Duration> for DurationParts {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl fmt::Display for DurationParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days > 0 {
            write!(f, "{}d ", self.days)?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Reads a positive number of minutes from separate hour and minute fields.
///
/// Blank fields count as zero, but at least one must be filled in. Hours may
/// be fractional (`"1.5"` is 90 minutes); the total is rounded to whole
/// minutes. Returns `None` for non-numeric or negative input and for a zero
/// total.
#[must_use]
pub fn minutes_from_parts(hours: &str, minutes: &str) -> Option<u32> {
    let hours = hours.trim();
    let minutes = minutes.trim();
    if hours.is_empty() && minutes.is_empty() {
        return None;
    }

    let field = |text: &str| -> Option<f64> {
        if text.is_empty() {
            return Some(0.0);
        }
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
    };

    let total = field(hours)?.mul_add(60.0, field(minutes)?).round();
    if total <= 0.0 || total > f64::from(u32::MAX) {
        return None;
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "total is a positive whole number within u32 range"
    )]
    let total = total as u32;
    Some(total)
}
