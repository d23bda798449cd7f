//! Deadline arithmetic in work time.
//!
//! Adding work time walks the schedule block by block and consumes each
//! block's available time, so the result is exact to the millisecond. It is
//! the inverse of [`Schedule::work_duration_between`]:
//! `work_duration_between(start, add_work_duration(start, d)) == d`.

use std::iter;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::schedule::Schedule;

/// Maximum number of days a forward walk covers before giving up.
pub const MAX_WALK_DAYS: usize = 5000;

impl Schedule {
    /// The earliest instant `x >= start` with `work_duration_between(start, x) == amount`.
    ///
    /// Counting starts at the next block when `start` is outside work time, and
    /// rolls over breaks, nights, weekends and holidays. When the amount ends
    /// exactly on a block end, that block end is returned rather than the next
    /// block start.
    ///
    /// Non-positive amounts return `start`. If the walk runs out of days (no
    /// blocks, or everything excluded) the last block end reached is returned,
    /// or `start` if none was.
    #[must_use]
    pub fn add_work_duration(&self, start: NaiveDateTime, amount: Duration) -> NaiveDateTime {
        if amount <= Duration::zero() {
            return start;
        }

        let mut remaining = amount;
        let mut cursor = start;
        let days = iter::successors(Some(start.date()), NaiveDate::succ_opt).take(MAX_WALK_DAYS);

        for day in days {
            if self.is_excluded(day) {
                continue;
            }
            for block in self.blocks() {
                let (block_start, block_end) = block.bounds_on(day);
                let from = block_start.max(start);
                if block_end <= from {
                    continue;
                }
                let available = block_end - from;
                if remaining <= available {
                    return from + remaining;
                }
                remaining -= available;
                cursor = block_end;
            }
        }

        tracing::warn!(
            %start,
            remaining_ms = remaining.num_milliseconds(),
            "ran out of working days while adding work time"
        );
        cursor
    }

    /// Moves a deadline by `delta_minutes` of work time.
    ///
    /// The current amount of work left is measured from `now` to the effective
    /// end of `previous_end` (a missing or past deadline counts as `now`). The
    /// returned deadline leaves exactly `max(0, current + delta)` of work time
    /// between `now` and its effective end, and is never before `now`.
    #[must_use]
    pub fn shift_end_by_work_duration(
        &self,
        now: NaiveDateTime,
        previous_end: Option<NaiveDateTime>,
        delta_minutes: i64,
    ) -> NaiveDateTime {
        let previous_end = previous_end.map_or(now, |end| end.max(now));
        let current = self.work_duration_between(now, self.effective_end_time(previous_end));

        let delta = Duration::try_minutes(delta_minutes).unwrap_or(if delta_minutes < 0 {
            Duration::MIN
        } else {
            Duration::MAX
        });
        let target = current
            .checked_add(&delta)
            .unwrap_or(delta)
            .max(Duration::zero());

        tracing::debug!(
            %now,
            %previous_end,
            current_ms = current.num_milliseconds(),
            target_ms = target.num_milliseconds(),
            "shifting deadline"
        );

        if target.is_zero() {
            return now;
        }
        self.add_work_duration(now, target)
    }
}
