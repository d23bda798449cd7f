//! Reminder windows around the start and end of the working day.
//!
//! Two reminders exist:
//! - **Early finish**: at the start of the day, when today's deadline falls
//!   before the end of the day, so the spare time can be planned.
//! - **Deadline update**: near the end of the day when the deadline spills
//!   past it, or shortly before a deadline earlier in the day, so the new
//!   deadline can be announced in time.
//!
//! Day start and day end come from the schedule's first and last block.
//! Window lengths are configurable through [`ReminderPolicy`].

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::schedule::Schedule;

/// Which reminder is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reminder {
    EarlyFinish,
    DeadlineUpdate,
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EarlyFinish => "early-finish",
            Self::DeadlineUpdate => "deadline-update",
        };
        write!(f, "{s}")
    }
}

/// Window lengths for reminders, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderPolicy {
    /// Length of the early-finish window after the day starts.
    /// Default: 30.
    pub early_window_minutes: u32,

    /// Length of the deadline-update window before the day ends.
    /// Default: 30.
    pub wrap_up_window_minutes: u32,

    /// How long before a same-day deadline the deadline-update reminder shows.
    /// Default: 60.
    pub lead_minutes: u32,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            early_window_minutes: 30,
            wrap_up_window_minutes: 30,
            lead_minutes: 60,
        }
    }
}

impl ReminderPolicy {
    /// Whether the early-finish reminder is due at `now`.
    ///
    /// Due within `[day start, day start + early window]` on a working day
    /// when the deadline is today and strictly before the day end.
    #[must_use]
    pub fn early_finish_due(
        &self,
        schedule: &Schedule,
        now: NaiveDateTime,
        deadline: NaiveDateTime,
    ) -> bool {
        let today = now.date();
        if schedule.is_excluded(today) {
            return false;
        }
        let (Some(day_start), Some(day_end)) = (schedule.day_start(), schedule.day_end()) else {
            return false;
        };

        let window_start = day_start.on(today);
        let window_end = window_start + minutes(self.early_window_minutes);
        (window_start..=window_end).contains(&now)
            && deadline.date() == today
            && deadline < day_end.on(today)
    }

    /// Whether the deadline-update reminder is due at `now`.
    ///
    /// A deadline at or after today's day end (including later dates) is due
    /// within `[day end - wrap-up window, day end]`. A deadline earlier today
    /// is due within the lead time before it, until it passes. Deadlines on
    /// earlier dates are never due.
    #[must_use]
    pub fn deadline_update_due(
        &self,
        schedule: &Schedule,
        now: NaiveDateTime,
        deadline: NaiveDateTime,
    ) -> bool {
        let today = now.date();
        if schedule.is_excluded(today) || deadline.date() < today {
            return false;
        }
        let Some(day_end) = schedule.day_end() else {
            return false;
        };

        let day_end = day_end.on(today);
        if deadline >= day_end {
            let window_start = day_end - minutes(self.wrap_up_window_minutes);
            (window_start..=day_end).contains(&now)
        } else {
            let window_start = deadline - minutes(self.lead_minutes);
            (window_start..deadline).contains(&now)
        }
    }

    /// All reminders due at `now`, in display order.
    #[must_use]
    pub fn due(
        &self,
        schedule: &Schedule,
        now: NaiveDateTime,
        deadline: NaiveDateTime,
    ) -> Vec<Reminder> {
        let mut due = Vec::new();
        if self.early_finish_due(schedule, now, deadline) {
            due.push(Reminder::EarlyFinish);
        }
        if self.deadline_update_due(schedule, now, deadline) {
            due.push(Reminder::DeadlineUpdate);
        }
        due
    }
}

fn minutes(value: u32) -> Duration {
    Duration::minutes(i64::from(value))
}
