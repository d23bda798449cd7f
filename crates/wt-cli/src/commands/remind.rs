//! Remind command for showing which reminders are due.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use wt_core::{Reminder, ReminderPolicy, Schedule};

use super::util::format_instant;

pub fn run<W: Write>(
    writer: &mut W,
    schedule: &Schedule,
    policy: &ReminderPolicy,
    now: NaiveDateTime,
    deadline: NaiveDateTime,
) -> Result<()> {
    let due = policy.due(schedule, now, deadline);
    if due.is_empty() {
        writeln!(writer, "No reminders due.")?;
        return Ok(());
    }

    let deadline = format_instant(deadline);
    for reminder in due {
        match reminder {
            Reminder::EarlyFinish => writeln!(
                writer,
                "{reminder}: the deadline ({deadline}) is before the end of today"
            )?,
            Reminder::DeadlineUpdate => writeln!(
                writer,
                "{reminder}: confirm or move the deadline ({deadline}) now"
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn render(now: NaiveDateTime, deadline: NaiveDateTime) -> String {
        let mut output = Vec::new();
        run(
            &mut output,
            &Schedule::default(),
            &ReminderPolicy::default(),
            now,
            deadline,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn nothing_due_mid_morning() {
        assert_eq!(render(at(10, 0), at(16, 0)), "No reminders due.\n");
    }

    #[test]
    fn early_finish_in_the_morning() {
        assert_eq!(
            render(at(8, 40), at(16, 0)),
            "early-finish: the deadline (Thu 2025-01-02 16:00) is before the end of today\n"
        );
    }

    #[test]
    fn deadline_update_near_end_of_day() {
        assert_eq!(
            render(at(17, 10), at(18, 0)),
            "deadline-update: confirm or move the deadline (Thu 2025-01-02 18:00) now\n"
        );
    }
}
