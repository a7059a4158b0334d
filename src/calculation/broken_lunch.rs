//! Advisory broken-lunch detection.
//!
//! A lunch break scheduled less than six hours after unit call counts as
//! "broken" under SWD/SCWD arrangements. The flag is advisory metadata for
//! payroll staff to apply an out-of-band penalty; it changes no monetary
//! figure in this engine. A Continuous Working Day has no fixed lunch break
//! to break and is never flagged.

use rust_decimal::Decimal;

use crate::models::DayKind;

use super::clock::{ClockTime, hours_diff};

/// Hours after unit call within which a lunch counts as broken.
pub const BROKEN_LUNCH_WINDOW: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Detects a broken lunch for SWD/SCWD days.
///
/// Returns `true` only when the day type has a fixed lunch break, both
/// times are valid, and the span from unit call to the call-sheet lunch is
/// under [`BROKEN_LUNCH_WINDOW`] hours.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{detect_broken_lunch, ClockTime};
/// use timesheet_engine::models::DayKind;
///
/// let unit_call = ClockTime::parse("07:00");
/// let lunch = ClockTime::parse("12:00");
/// assert!(detect_broken_lunch(DayKind::Swd, unit_call, lunch));
/// assert!(!detect_broken_lunch(DayKind::Cwd, unit_call, lunch));
/// ```
pub fn detect_broken_lunch(
    day: DayKind,
    unit_call: Option<ClockTime>,
    call_sheet_lunch: Option<ClockTime>,
) -> bool {
    if day == DayKind::Cwd {
        return false;
    }
    let (Some(unit_call), Some(lunch)) = (unit_call, call_sheet_lunch) else {
        return false;
    };
    hours_diff(Some(unit_call), Some(lunch)) < BROKEN_LUNCH_WINDOW
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(s: &str) -> Option<ClockTime> {
        ClockTime::parse(s)
    }

    // ==========================================================================
    // BL-001: five hours to lunch is broken
    // ==========================================================================
    #[test]
    fn test_bl_001_five_hours_to_lunch_is_broken() {
        assert!(detect_broken_lunch(DayKind::Swd, clock("07:00"), clock("12:00")));
        assert!(detect_broken_lunch(DayKind::Scwd, clock("07:00"), clock("12:00")));
    }

    // ==========================================================================
    // BL-002: six hours exactly is not broken
    // ==========================================================================
    #[test]
    fn test_bl_002_six_hours_is_not_broken() {
        assert!(!detect_broken_lunch(DayKind::Swd, clock("07:00"), clock("13:00")));
    }

    #[test]
    fn test_later_lunch_is_not_broken() {
        assert!(!detect_broken_lunch(DayKind::Swd, clock("07:00"), clock("13:30")));
    }

    // ==========================================================================
    // BL-003: continuous day is never flagged
    // ==========================================================================
    #[test]
    fn test_bl_003_cwd_never_flagged() {
        assert!(!detect_broken_lunch(DayKind::Cwd, clock("07:00"), clock("12:00")));
        assert!(!detect_broken_lunch(DayKind::Cwd, clock("07:00"), clock("08:00")));
    }

    #[test]
    fn test_missing_lunch_is_not_flagged() {
        assert!(!detect_broken_lunch(DayKind::Swd, clock("07:00"), None));
    }

    #[test]
    fn test_missing_unit_call_is_not_flagged() {
        assert!(!detect_broken_lunch(DayKind::Swd, None, clock("12:00")));
    }
}
