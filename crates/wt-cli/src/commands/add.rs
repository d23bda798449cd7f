//! Add command for finding when an amount of work time is done.

use std::io::Write;

use anyhow::{Result, bail};
use chrono::{Duration, NaiveDateTime};
use wt_core::{DurationParts, Schedule, minutes_from_parts};

use super::util::format_instant;

pub fn run<W: Write>(
    writer: &mut W,
    schedule: &Schedule,
    from: NaiveDateTime,
    hours: &str,
    minutes: &str,
) -> Result<()> {
    let Some(total) = minutes_from_parts(hours, minutes) else {
        bail!("Enter a positive amount of work time with --hours and/or --minutes");
    };

    let work = Duration::minutes(i64::from(total));
    let done = schedule.add_work_duration(from, work);
    tracing::debug!(%from, %done, total, "added work time");

    writeln!(writer, "Start: {}", format_instant(from))?;
    writeln!(writer, "Work:  {}", DurationParts::from(work))?;
    writeln!(writer, "Done:  {}", format_instant(done))?;
    Ok(())
}
