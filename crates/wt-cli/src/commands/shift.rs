//! Shift command for moving a deadline by work time.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use wt_core::{DurationParts, Schedule};

use super::util::format_instant;

pub fn run<W: Write>(
    writer: &mut W,
    schedule: &Schedule,
    now: NaiveDateTime,
    deadline: Option<NaiveDateTime>,
    delta_minutes: i64,
) -> Result<()> {
    let shifted = schedule.shift_end_by_work_duration(now, deadline, delta_minutes);
    let remaining = schedule.work_duration_between(now, schedule.effective_end_time(shifted));
    tracing::debug!(?deadline, %shifted, delta_minutes, "shifted deadline");

    match deadline {
        Some(previous) => writeln!(writer, "Previous deadline: {}", format_instant(previous))?,
        None => writeln!(writer, "Previous deadline: none (counting from now)")?,
    }
    writeln!(writer, "New deadline:      {}", format_instant(shifted))?;
    writeln!(writer, "Remaining:         {}", DurationParts::from(remaining))?;
    Ok(())
}
