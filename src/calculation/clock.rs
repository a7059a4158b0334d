//! Wall-clock time parsing and forward differences.
//!
//! Timesheet times arrive as `"HH:MM"` 24-hour strings within a single
//! nominal 24h cycle, so this module works with a bare [`ClockTime`] rather
//! than a real timestamp. Malformed input degrades to the `None` sentinel
//! and downstream arithmetic degrades to zero; nothing in this module can
//! fail loudly.

use rust_decimal::Decimal;

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock time of day, minute resolution.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::ClockTime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let wrap = ClockTime::parse("23:45").unwrap();
/// assert_eq!(wrap.as_hours(), Decimal::from_str("23.75").unwrap());
///
/// assert!(ClockTime::parse("25:00").is_none());
/// assert!(ClockTime::parse("").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Parses an `"HH:MM"` string into a clock time.
    ///
    /// Returns `None` for anything malformed: empty input, missing colon,
    /// non-numeric parts, hours past 23, or minutes past 59. `None` is the
    /// engine's invalid-time sentinel; it is never an error condition.
    pub fn parse(s: &str) -> Option<Self> {
        let (hour_part, minute_part) = s.trim().split_once(':')?;
        let hour: u32 = hour_part.parse().ok()?;
        let minute: u32 = minute_part.parse().ok()?;
        if hour >= 24 || minute >= 60 {
            return None;
        }
        Some(Self { hour, minute })
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.hour) * MINUTES_PER_HOUR + i64::from(self.minute)
    }

    /// The time as fractional hours (`hours + minutes/60`).
    pub fn as_hours(&self) -> Decimal {
        Decimal::from(self.minutes_from_midnight()) / Decimal::from(MINUTES_PER_HOUR)
    }
}

/// Parses an optional raw time field into a clock time.
///
/// Absent fields and malformed strings collapse to the same `None`
/// sentinel, so callers never have to distinguish the two.
pub fn parse_clock(raw: Option<&str>) -> Option<ClockTime> {
    raw.and_then(ClockTime::parse)
}

/// Returns the forward time from `start` to `end` in fractional hours.
///
/// A negative span crosses midnight and has 24 hours added, so the result
/// is always in `[0, 24)`. If either side is the invalid sentinel the
/// difference degrades to zero.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{hours_diff, ClockTime};
/// use rust_decimal::Decimal;
///
/// let call = ClockTime::parse("22:00");
/// let wrap = ClockTime::parse("02:00");
/// assert_eq!(hours_diff(call, wrap), Decimal::from(4));
/// assert_eq!(hours_diff(None, wrap), Decimal::ZERO);
/// ```
pub fn hours_diff(start: Option<ClockTime>, end: Option<ClockTime>) -> Decimal {
    let (Some(start), Some(end)) = (start, end) else {
        return Decimal::ZERO;
    };

    let mut minutes = end.minutes_from_midnight() - start.minutes_from_midnight();
    if minutes < 0 {
        minutes += MINUTES_PER_DAY;
    }
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}
