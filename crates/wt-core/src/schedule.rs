//! Schedule definition: daily work blocks plus excluded weekdays and holidays.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::types::{TimeOfDay, ValidationError, WorkBlock};

/// A weekly work schedule.
///
/// The same ordered blocks apply to every day that is neither an excluded
/// weekday nor a holiday. Construction guarantees the blocks are
/// chronological and non-overlapping; an empty block list is allowed and
/// simply never counts as work time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleSpec", into = "ScheduleSpec")]
pub struct Schedule {
    blocks: Vec<WorkBlock>,
    excluded_weekdays: Vec<Weekday>,
    holidays: BTreeSet<NaiveDate>,
}

/// Serialized form of a [`Schedule`]. Missing keys fall back to the default schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ScheduleSpec {
    blocks: Vec<WorkBlock>,
    excluded_weekdays: Vec<Weekday>,
    holidays: Vec<NaiveDate>,
}

impl Default for ScheduleSpec {
    fn default() -> Self {
        Schedule::default().into()
    }
}

impl TryFrom<ScheduleSpec> for Schedule {
    type Error = ValidationError;

    fn try_from(spec: ScheduleSpec) -> Result<Self, Self::Error> {
        Self::new(spec.blocks, spec.excluded_weekdays, spec.holidays)
    }
}

impl From<Schedule> for ScheduleSpec {
    fn from(schedule: Schedule) -> Self {
        Self {
            blocks: schedule.blocks,
            excluded_weekdays: schedule.excluded_weekdays,
            holidays: schedule.holidays.into_iter().collect(),
        }
    }
}

impl Default for Schedule {
    /// 08:30-12:00 and 13:00-17:30, Monday to Friday, no holidays.
    fn default() -> Self {
        Self {
            blocks: vec![
                WorkBlock {
                    start: TimeOfDay::hm(8, 30),
                    end: TimeOfDay::hm(12, 0),
                },
                WorkBlock {
                    start: TimeOfDay::hm(13, 0),
                    end: TimeOfDay::hm(17, 30),
                },
            ],
            excluded_weekdays: vec![Weekday::Sat, Weekday::Sun],
            holidays: BTreeSet::new(),
        }
    }
}

impl Schedule {
    /// Creates a schedule after checking that blocks are ordered and disjoint.
    pub fn new(
        blocks: Vec<WorkBlock>,
        excluded_weekdays: impl IntoIterator<Item = Weekday>,
        holidays: impl IntoIterator<Item = NaiveDate>,
    ) -> Result<Self, ValidationError> {
        for block in &blocks {
            block.validate()?;
        }
        for pair in blocks.windows(2) {
            if pair[1].start() < pair[0].end() {
                return Err(ValidationError::OverlappingBlocks {
                    start: pair[1].start(),
                    end: pair[1].end(),
                    previous_end: pair[0].end(),
                });
            }
        }

        let mut weekdays: Vec<Weekday> = Vec::new();
        for weekday in excluded_weekdays {
            if !weekdays.contains(&weekday) {
                weekdays.push(weekday);
            }
        }
        weekdays.sort_by_key(Weekday::num_days_from_monday);

        Ok(Self {
            blocks,
            excluded_weekdays: weekdays,
            holidays: holidays.into_iter().collect(),
        })
    }

    /// Returns a copy of this schedule with an extra holiday.
    #[must_use]
    pub fn with_holiday(mut self, date: NaiveDate) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Returns a copy of this schedule with a different set of excluded weekdays.
    #[must_use]
    pub fn with_excluded_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.excluded_weekdays.clear();
        for weekday in weekdays {
            if !self.excluded_weekdays.contains(&weekday) {
                self.excluded_weekdays.push(weekday);
            }
        }
        self.excluded_weekdays
            .sort_by_key(Weekday::num_days_from_monday);
        self
    }

    pub fn blocks(&self) -> &[WorkBlock] {
        &self.blocks
    }

    pub fn excluded_weekdays(&self) -> &[Weekday] {
        &self.excluded_weekdays
    }

    pub const fn holidays(&self) -> &BTreeSet<NaiveDate> {
        &self.holidays
    }

    /// Whether the date falls on an excluded weekday.
    #[must_use]
    pub fn is_weekend(&self, date: NaiveDate) -> bool {
        self.excluded_weekdays.contains(&date.weekday())
    }

    #[must_use]
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Whether no work happens on this date at all.
    #[must_use]
    pub fn is_excluded(&self, date: NaiveDate) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }

    /// Start of the first block of a working day.
    #[must_use]
    pub fn day_start(&self) -> Option<TimeOfDay> {
        self.blocks.first().map(WorkBlock::start)
    }

    /// End of the last block of a working day.
    #[must_use]
    pub fn day_end(&self) -> Option<TimeOfDay> {
        self.blocks.last().map(WorkBlock::end)
    }
}
