//! Check command for classifying an instant.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use wt_core::Schedule;

use super::util::format_instant;

pub fn run<W: Write>(writer: &mut W, schedule: &Schedule, at: NaiveDateTime) -> Result<()> {
    writeln!(writer, "Time:    {}", format_instant(at))?;

    let Some(reason) = schedule.pause_reason(at) else {
        writeln!(writer, "Working: yes")?;
        return Ok(());
    };

    writeln!(writer, "Working: no ({reason})")?;
    let resume_at = schedule.next_resume_instant(at);
    if resume_at == at {
        writeln!(writer, "Resumes: no work scheduled ahead")?;
    } else {
        writeln!(writer, "Resumes: {}", format_instant(resume_at))?;
    }
    Ok(())
}
