//! Day-type lunch and overtime threshold tables.
//!
//! A Standard Working Day pays a full unpaid lunch hour and measures
//! overtime against the full reference day length; a Continuous day folds a
//! paid working lunch into the shift, shortening both the deduction and the
//! point at which overtime starts by the lunch arrangement's duration. The
//! Short-Continuous day sits halfway between the two.

use rust_decimal::Decimal;

use crate::models::DayKind;

/// Lunch deduction for a Standard Working Day, in hours.
pub const SWD_LUNCH_DEDUCTION: Decimal = Decimal::ONE;

/// Lunch deduction for a Short-Continuous Working Day, in hours.
pub const SCWD_LUNCH_DEDUCTION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns the hours subtracted from the raw worked span for lunch.
///
/// | Day type | Deduction |
/// |---|---|
/// | SWD | 1.0 |
/// | SCWD | 0.5 |
/// | CWD | 0.0 (working lunch, paid) |
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::lunch_deduction;
/// use timesheet_engine::models::DayKind;
/// use rust_decimal::Decimal;
///
/// assert_eq!(lunch_deduction(DayKind::Swd), Decimal::ONE);
/// assert_eq!(lunch_deduction(DayKind::Cwd), Decimal::ZERO);
/// ```
pub fn lunch_deduction(day: DayKind) -> Decimal {
    match day {
        DayKind::Swd => SWD_LUNCH_DEDUCTION,
        DayKind::Scwd => SCWD_LUNCH_DEDUCTION,
        DayKind::Cwd => Decimal::ZERO,
    }
}

/// Returns the overtime threshold for a day type and reference day length.
///
/// The threshold is `base_day_hours` minus 0 (SWD), 0.5 (SCWD) or
/// 1.0 (CWD): the paid working span before overtime is consistently
/// shorter by exactly the lunch arrangement's duration.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::ot_threshold;
/// use timesheet_engine::models::DayKind;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Decimal::from(10);
/// assert_eq!(ot_threshold(DayKind::Swd, base), Decimal::from(10));
/// assert_eq!(ot_threshold(DayKind::Scwd, base), Decimal::from_str("9.5").unwrap());
/// assert_eq!(ot_threshold(DayKind::Cwd, base), Decimal::from(9));
/// ```
pub fn ot_threshold(day: DayKind, base_day_hours: Decimal) -> Decimal {
    let reduction = match day {
        DayKind::Swd => Decimal::ZERO,
        DayKind::Scwd => SCWD_LUNCH_DEDUCTION,
        DayKind::Cwd => Decimal::ONE,
    };
    base_day_hours - reduction
}
