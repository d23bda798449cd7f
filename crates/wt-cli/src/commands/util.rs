//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::NaiveDateTime;
use regex::Regex;

/// Pre-compiled regex for signed work-time deltas.
static DELTA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([+-]?)(?:(\d+)h)?(?:(\d+)m?)?$").unwrap());

/// Accepted local datetime layouts, tried in order.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Display format for instants.
const DISPLAY_FORMAT: &str = "%a %Y-%m-%d %H:%M";

/// Parse a local datetime (no timezone).
///
/// Supports:
/// - "2025-01-02T17:30", "2025-01-02T17:30:00"
/// - "2025-01-02 17:30", "2025-01-02 17:30:00"
pub fn parse_datetime(s: &str) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .with_context(|| {
            format!("Invalid datetime: {s}. Use local time, e.g. 2025-01-02T17:30 or '2025-01-02 17:30'")
        })
}

/// Parse a signed work-time delta into minutes.
///
/// Supports "90", "+90m", "-45m", "2h", "+1h30m", "1h30".
pub fn parse_minutes_delta(s: &str) -> anyhow::Result<i64> {
    let s = s.trim();
    let caps = DELTA_RE
        .captures(s)
        .filter(|caps| caps.get(2).is_some() || caps.get(3).is_some())
        .with_context(|| format!("Invalid duration: {s}. Use e.g. +1h30m, -45m or 90"))?;

    let hours: i64 = match caps.get(2) {
        Some(m) => m.as_str().parse().context("hours out of range")?,
        None => 0,
    };
    let minutes: i64 = match caps.get(3) {
        Some(m) => m.as_str().parse().context("minutes out of range")?,
        None => 0,
    };

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .with_context(|| format!("Duration too large: {s}"))?;

    Ok(if &caps[1] == "-" { -total } else { total })
}

/// Format an instant for display, e.g. "Thu 2025-01-02 17:30".
pub fn format_instant(instant: NaiveDateTime) -> String {
    instant.format(DISPLAY_FORMAT).to_string()
}
