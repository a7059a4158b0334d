//! Working hours from the unit call to wrap.
//!
//! The raw worked span runs from unit call to wrap (wrap-aware across
//! midnight); the day type's lunch deduction is then subtracted, clamped
//! at zero so a short day never goes negative.

use rust_decimal::Decimal;

use crate::models::DayKind;

use super::clock::{ClockTime, hours_diff};
use super::day_rules::lunch_deduction;

/// The result of the working-hours calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHoursResult {
    /// The raw span from unit call to wrap.
    pub raw_hours: Decimal,
    /// The lunch deduction for the day type.
    pub lunch_deduction: Decimal,
    /// `max(0, raw_hours - lunch_deduction)`.
    pub working_hours: Decimal,
}

/// Calculates working hours for a day.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{calculate_working_hours, ClockTime};
/// use timesheet_engine::models::DayKind;
/// use rust_decimal::Decimal;
///
/// let result = calculate_working_hours(
///     ClockTime::parse("07:00"),
///     ClockTime::parse("19:00"),
///     DayKind::Swd,
/// );
/// assert_eq!(result.raw_hours, Decimal::from(12));
/// assert_eq!(result.working_hours, Decimal::from(11));
/// ```
pub fn calculate_working_hours(
    unit_call: Option<ClockTime>,
    wrap_out: Option<ClockTime>,
    day: DayKind,
) -> WorkingHoursResult {
    let raw_hours = hours_diff(unit_call, wrap_out);
    let deduction = lunch_deduction(day);
    let working_hours = (raw_hours - deduction).max(Decimal::ZERO);

    WorkingHoursResult {
        raw_hours,
        lunch_deduction: deduction,
        working_hours,
    }
}
