//! Status command for showing the countdown toward a deadline.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use wt_core::{DurationParts, Schedule};

use super::util::format_instant;

pub fn run<W: Write>(
    writer: &mut W,
    schedule: &Schedule,
    now: NaiveDateTime,
    deadline: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let countdown = schedule.countdown(now, deadline);
    tracing::debug!(?countdown, "computed countdown");

    if json {
        serde_json::to_writer_pretty(&mut *writer, &countdown)
            .context("failed to serialize countdown")?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "Now:          {}", format_instant(countdown.now))?;
    writeln!(writer, "Deadline:     {}", format_instant(countdown.deadline))?;
    if countdown.effective_end != countdown.deadline {
        writeln!(
            writer,
            "Counts until: {}",
            format_instant(countdown.effective_end)
        )?;
    }
    writeln!(
        writer,
        "Remaining:    {}",
        DurationParts::from(countdown.remaining())
    )?;

    match (countdown.pause, countdown.resume_at) {
        (Some(reason), Some(resume_at)) => writeln!(
            writer,
            "Status:       paused ({reason}), resumes {}",
            format_instant(resume_at)
        )?,
        _ => writeln!(writer, "Status:       counting")?,
    }

    if countdown.overdue {
        writeln!(writer, "Deadline has passed.")?;
    }

    Ok(())
}
