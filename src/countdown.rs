//! Countdown and date-display helpers.
//!
//! Pure functions over a target timestamp and a caller-supplied clock.
//! The once-per-second tick and its cancellation belong to the UI host;
//! this module only re-derives the displayed value, so it is trivially
//! testable with simulated clocks.

use chrono::{DateTime, NaiveDate, Utc};

/// Time remaining until a target instant, decomposed for display.
///
/// Saturates at zero once the target has passed; no field ever goes
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    /// Whole days remaining
    pub days: u64,
    /// Hours remaining after days
    pub hours: u64,
    /// Minutes remaining after hours
    pub minutes: u64,
    /// Seconds remaining after minutes
    pub seconds: u64,
    /// Whether the target is in the past
    pub past: bool,
}

impl TimeLeft {
    /// All-zero, target passed.
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        past: true,
    };

    /// Time remaining from `now` until `target`.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let total = (target - now).num_seconds();
        if total <= 0 {
            return Self::ZERO;
        }
        let total = total as u64;
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            past: false,
        }
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

/// A countdown toward a fixed target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    /// Create a countdown toward `target`.
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Create a countdown from a stored date column, `None` when the
    /// column does not parse.
    pub fn from_stored(date: &str) -> Option<Self> {
        parse_timestamp(date).map(Self::new)
    }

    /// The target instant.
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Remaining time as of `now`.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeLeft {
        TimeLeft::until(self.target, now)
    }

    /// Whether the target has passed as of `now`.
    pub fn is_past(&self, now: DateTime<Utc>) -> bool {
        now >= self.target
    }
}

/// Parse a stored date column: RFC 3339 first, then a bare `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(DateTime::from_naive_utc_and_offset(
        date.and_hms_opt(0, 0, 0)?,
        Utc,
    ))
}

/// Long display form: "Saturday, June 14, 2025".
pub fn format_long_date(instant: DateTime<Utc>) -> String {
    instant.format("%A, %B %-d, %Y").to_string()
}

/// Clock display form: "4:30 PM".
pub fn format_clock_time(instant: DateTime<Utc>) -> String {
    instant.format("%-I:%M %p").to_string()
}
