//! Work-calendar arithmetic for work-time countdowns.
//!
//! This crate contains the pure logic for:
//! - Classification: is an instant work time, and if not, why not
//! - Overlap: how much work time lies between two instants
//! - Deadlines: effective ends, resume times, and shifting a deadline by work time
//!
//! Everything hangs off [`Schedule`]. Callers supply `now` explicitly; nothing
//! here reads the system clock.

mod calendar;
mod countdown;
mod duration;
mod reminder;
mod schedule;
mod shift;
mod types;

pub use calendar::{PauseReason, SEARCH_DAYS};
pub use countdown::Countdown;
pub use duration::{DurationParts, minutes_from_parts};
pub use reminder::{Reminder, ReminderPolicy};
pub use schedule::Schedule;
pub use shift::MAX_WALK_DAYS;
pub use types::{TimeOfDay, ValidationError, WorkBlock};
