//! Work-time classification and overlap arithmetic.
//!
//! Every query takes the instants it needs as arguments; nothing here reads
//! the clock. Instants are local wall-clock times (`NaiveDateTime`) and no
//! timezone conversion happens anywhere.
//!
//! # Bounded searches
//!
//! Looking backward for the last completed block or forward for the next
//! block start scans at most [`SEARCH_DAYS`] days. A schedule with no blocks,
//! or a holiday list covering the whole window, makes the search give up and
//! return the input unchanged.

use std::fmt;
use std::iter;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;

/// How many days a bounded search scans before giving up (about a year).
pub const SEARCH_DAYS: usize = 370;

/// Why an instant is not work time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PauseReason {
    /// Between two blocks of a working day.
    Break,
    /// Before the first block of a working day.
    BeforeHours,
    /// At or after the end of the last block of a working day.
    AfterHours,
    /// On an excluded weekday.
    Weekend,
    /// On a holiday.
    Holiday,
}

impl PauseReason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::BeforeHours => "before-hours",
            Self::AfterHours => "after-hours",
            Self::Weekend => "weekend",
            Self::Holiday => "holiday",
        }
    }
}

impl fmt::Display for PauseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Days going back from `day`, `day` included.
fn days_back(day: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    iter::successors(Some(day), NaiveDate::pred_opt).take(SEARCH_DAYS)
}

/// Days going forward from the day after `day`.
fn days_after(day: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    iter::successors(day.succ_opt(), NaiveDate::succ_opt).take(SEARCH_DAYS)
}

impl Schedule {
    /// Whether `at` counts as work time.
    ///
    /// Weekends and holidays never count, whatever the wall-clock time.
    /// Blocks are half-open: a block's start is work time, its end is not.
    #[must_use]
    pub fn is_work_time(&self, at: NaiveDateTime) -> bool {
        if self.is_excluded(at.date()) {
            return false;
        }
        let time = at.time();
        self.blocks().iter().any(|block| block.contains(time))
    }

    /// Total work time inside `[start, end)`.
    ///
    /// Sums, for every calendar day from `start`'s date to `end`'s date, the
    /// overlap of `[start, end)` with each of that day's blocks. Returns zero
    /// when `end <= start`.
    #[must_use]
    pub fn work_duration_between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Duration {
        if end <= start {
            return Duration::zero();
        }

        let last_day = end.date();
        let days = iter::successors(Some(start.date()), NaiveDate::succ_opt)
            .take_while(|day| *day <= last_day);

        let mut total = Duration::zero();
        for day in days {
            if self.is_excluded(day) {
                continue;
            }
            for block in self.blocks() {
                let (block_start, block_end) = block.bounds_on(day);
                let overlap = end.min(block_end) - start.max(block_start);
                if overlap > Duration::zero() {
                    total += overlap;
                }
            }
        }
        total
    }

    /// The instant up to which work time toward `deadline` actually accrues.
    ///
    /// A deadline inside work time is returned unchanged. Otherwise this is the
    /// end of the most recent block that ends at or before the deadline,
    /// looking at the deadline's own day first and then earlier days.
    #[must_use]
    pub fn effective_end_time(&self, deadline: NaiveDateTime) -> NaiveDateTime {
        if self.is_work_time(deadline) {
            return deadline;
        }

        for day in days_back(deadline.date()) {
            if self.is_excluded(day) {
                continue;
            }
            let last_completed = self
                .blocks()
                .iter()
                .rev()
                .map(|block| block.bounds_on(day))
                .find(|(start, end)| end > start && *end <= deadline);
            if let Some((_, end)) = last_completed {
                return end;
            }
        }

        tracing::warn!(%deadline, "no completed work block found, using deadline as is");
        deadline
    }

    /// The earliest instant at or after `now` at which work time runs.
    ///
    /// Returns `now` during work time. Otherwise the next block start later
    /// today, or the first block start of the next working day.
    #[must_use]
    pub fn next_resume_instant(&self, now: NaiveDateTime) -> NaiveDateTime {
        if self.is_work_time(now) {
            return now;
        }

        let today = now.date();
        if !self.is_excluded(today) {
            let later_today = self
                .blocks()
                .iter()
                .map(|block| block.start().on(today))
                .find(|start| *start > now);
            if let Some(start) = later_today {
                return start;
            }
        }

        let Some(first) = self.day_start() else {
            tracing::warn!(%now, "schedule has no work blocks");
            return now;
        };

        match days_after(today).find(|day| !self.is_excluded(*day)) {
            Some(day) => first.on(day),
            None => {
                tracing::warn!(%now, "no working day found ahead");
                now
            }
        }
    }

    /// Classifies why `now` is not work time; `None` while working.
    ///
    /// Holidays take precedence over weekends, which take precedence over the
    /// position of `now` relative to the day's blocks.
    #[must_use]
    pub fn pause_reason(&self, now: NaiveDateTime) -> Option<PauseReason> {
        if self.is_work_time(now) {
            return None;
        }

        let today = now.date();
        if self.is_holiday(today) {
            return Some(PauseReason::Holiday);
        }
        if self.is_weekend(today) {
            return Some(PauseReason::Weekend);
        }

        let (Some(day_start), Some(day_end)) = (self.day_start(), self.day_end()) else {
            return Some(PauseReason::AfterHours);
        };

        let reason = if now < day_start.on(today) {
            PauseReason::BeforeHours
        } else if now >= day_end.on(today) {
            PauseReason::AfterHours
        } else {
            PauseReason::Break
        };
        Some(reason)
    }
}
