//! Late-night hours past 23:00.
//!
//! To measure hours worked past 23:00 without a real date, a wrap clock
//! numerically below 06:00 is taken to land after midnight and has 24 added
//! before comparison. That disambiguates `23:30` from `00:30 next day`
//! inside a single nominal 24h cycle.

use rust_decimal::Decimal;

use super::clock::ClockTime;

/// The wall-clock hour late-night premium starts at.
pub const LATE_NIGHT_START: Decimal = Decimal::from_parts(23, 0, 0, false, 0);

/// Wrap clocks before this hour are read as after midnight.
pub const EARLY_MORNING_CUTOFF: u32 = 6;

/// Returns the wrap clock as fractional hours, adjusted past midnight.
///
/// A wrap at `02:00` becomes 26.0; a wrap at `23:30` stays 23.5.
pub fn adjusted_wrap_hours(wrap_out: ClockTime) -> Decimal {
    let hours = wrap_out.as_hours();
    if wrap_out.hour() < EARLY_MORNING_CUTOFF {
        hours + Decimal::from(24)
    } else {
        hours
    }
}

/// Returns the hours worked past 23:00.
///
/// Zero when the wrap is invalid or the shift wraps before 23:00.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{late_night_hours, ClockTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(
///     late_night_hours(ClockTime::parse("23:45")),
///     Decimal::from_str("0.75").unwrap()
/// );
/// assert_eq!(
///     late_night_hours(ClockTime::parse("01:00")),
///     Decimal::from(2)
/// );
/// assert_eq!(late_night_hours(ClockTime::parse("22:00")), Decimal::ZERO);
/// ```
pub fn late_night_hours(wrap_out: Option<ClockTime>) -> Decimal {
    let Some(wrap_out) = wrap_out else {
        return Decimal::ZERO;
    };
    (adjusted_wrap_hours(wrap_out) - LATE_NIGHT_START).max(Decimal::ZERO)
}
