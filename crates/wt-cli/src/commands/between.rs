//! Between command for measuring work time in a range.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use wt_core::{DurationParts, Schedule};

pub fn run<W: Write>(
    writer: &mut W,
    schedule: &Schedule,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<()> {
    let work = schedule.work_duration_between(start, end);
    writeln!(
        writer,
        "Work time: {} ({} min)",
        DurationParts::from(work),
        work.num_minutes()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn on(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn render(start: NaiveDateTime, end: NaiveDateTime) -> String {
        let mut output = Vec::new();
        run(&mut output, &Schedule::default(), start, end).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn between_across_lunch() {
        assert_eq!(render(on(2, 11, 30), on(2, 13, 30)), "Work time: 01:00:00 (60 min)\n");
    }

    #[test]
    fn between_over_a_week() {
        assert_eq!(
            render(on(6, 0, 0), on(13, 0, 0)),
            "Work time: 1d 16:00:00 (2400 min)\n"
        );
    }

    #[test]
    fn between_inverted_range() {
        assert_eq!(render(on(2, 13, 0), on(2, 9, 0)), "Work time: 00:00:00 (0 min)\n");
    }
}
