//! Per-tick countdown snapshot.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::calendar::PauseReason;
use crate::schedule::Schedule;

/// Everything a host needs to render the countdown toward a deadline at `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub now: NaiveDateTime,
    pub deadline: NaiveDateTime,

    /// The deadline moved back to the end of the last completed work block.
    pub effective_end: NaiveDateTime,

    /// Work time left between `now` and `effective_end`, in milliseconds.
    pub remaining_ms: i64,

    /// Whether `now` is at or past the deadline itself.
    pub overdue: bool,

    /// Why the countdown is paused, if it is.
    pub pause: Option<PauseReason>,

    /// When work time resumes. Only set while paused.
    pub resume_at: Option<NaiveDateTime>,
}

impl Countdown {
    /// Work time left as a `Duration`.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::milliseconds(self.remaining_ms)
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.pause.is_some()
    }
}

impl Schedule {
    /// Computes the countdown toward `deadline` as seen at `now`.
    #[must_use]
    pub fn countdown(&self, now: NaiveDateTime, deadline: NaiveDateTime) -> Countdown {
        let effective_end = self.effective_end_time(deadline);
        let remaining = self.work_duration_between(now, effective_end);
        let pause = self.pause_reason(now);
        let resume_at = pause.map(|_| self.next_resume_instant(now));

        Countdown {
            now,
            deadline,
            effective_end,
            remaining_ms: remaining.num_milliseconds(),
            overdue: now >= deadline,
            pause,
            resume_at,
        }
    }
}
