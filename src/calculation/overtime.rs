//! Base/overtime split with the late-night carve-out.
//!
//! Working hours up to the day type's threshold are paid at the base rate;
//! the excess is overtime, minus any hours already counted for the
//! late-night premium so no hour is paid at both premium rates.

use rust_decimal::Decimal;

/// The split of working hours into base and overtime buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeSplit {
    /// Working hours paid at the base rate (capped at the threshold).
    pub base_hours: Decimal,
    /// Overtime hours past the threshold, late-night hours carved out.
    pub ot_hours: Decimal,
}

/// Splits working hours into base and overtime.
///
/// `base_hours = min(working_hours, threshold)` and
/// `ot_hours = max(0, working_hours - threshold - late_night_hours)`.
/// Late-night hours are carved out of the overtime pool so they are never
/// double-counted at both the OT and late-night premium rates.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::split_overtime;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let split = split_overtime(dec("15.75"), dec("10"), dec("0.75"));
/// assert_eq!(split.base_hours, dec("10"));
/// assert_eq!(split.ot_hours, dec("5"));
/// ```
pub fn split_overtime(
    working_hours: Decimal,
    threshold: Decimal,
    late_night_hours: Decimal,
) -> OvertimeSplit {
    let base_hours = working_hours.min(threshold);
    let ot_hours = (working_hours - threshold - late_night_hours).max(Decimal::ZERO);

    OvertimeSplit {
        base_hours,
        ot_hours,
    }
}
