//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

use crate::commands::util::{parse_datetime, parse_minutes_delta};

/// Work-time countdown.
///
/// Counts only scheduled work time (business hours minus breaks, weekends
/// and holidays) toward a deadline.
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Evaluate as if the local clock read this time (e.g. 2025-01-02T09:00).
    #[arg(long, global = true, value_parser = parse_datetime)]
    pub now: Option<NaiveDateTime>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show work time remaining until the deadline.
    Status {
        /// The deadline (defaults to `deadline` from the config).
        #[arg(long, value_parser = parse_datetime)]
        deadline: Option<NaiveDateTime>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show whether an instant is work time and when work resumes.
    Check {
        /// The instant to classify (defaults to now).
        #[arg(long, value_parser = parse_datetime)]
        at: Option<NaiveDateTime>,
    },

    /// Show the work time between two instants.
    Between {
        /// Start of the range.
        #[arg(value_parser = parse_datetime)]
        start: NaiveDateTime,

        /// End of the range.
        #[arg(value_parser = parse_datetime)]
        end: NaiveDateTime,
    },

    /// Show when a given amount of work time will be done.
    Add {
        /// Start counting from here (defaults to now).
        #[arg(long, value_parser = parse_datetime)]
        from: Option<NaiveDateTime>,

        /// Hours of work, fractions allowed (e.g. 1.5).
        #[arg(long)]
        hours: Option<String>,

        /// Minutes of work.
        #[arg(long)]
        minutes: Option<String>,
    },

    /// Move the deadline by an amount of work time.
    Shift {
        /// Signed work time to add, e.g. +1h30m, -45m, 90.
        #[arg(long, allow_hyphen_values = true, value_parser = parse_minutes_delta)]
        by: i64,

        /// The deadline to move (defaults to `deadline` from the config, then now).
        #[arg(long, value_parser = parse_datetime)]
        deadline: Option<NaiveDateTime>,
    },

    /// Show which reminders are due now.
    Remind {
        /// The deadline (defaults to `deadline` from the config).
        #[arg(long, value_parser = parse_datetime)]
        deadline: Option<NaiveDateTime>,
    },
}
