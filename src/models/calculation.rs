//! Calculation result model.
//!
//! This module defines [`TimesheetCalculation`], the full breakdown of hour
//! categories and earnings derived from one rate card and one day's entry.
//! Calculations are never stored; they are recomputed on demand as a pure
//! function of `RateCard` × `TimesheetEntry`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The derived hour and earnings breakdown for one timesheet entry.
///
/// Every hours field is non-negative, every numeric field is rounded to
/// 2 decimal places, and `total_earnings` is the exact sum of
/// `pre_call_earnings + daily_earnings + ot_earnings + late_night_earnings
/// + sixth_day_bonus + seventh_day_bonus + kit_rental` as emitted.
///
/// The default value is the all-zero calculation returned for incomplete
/// entries.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::TimesheetCalculation;
/// use rust_decimal::Decimal;
///
/// let zeroed = TimesheetCalculation::default();
/// assert_eq!(zeroed.total_earnings, Decimal::ZERO);
/// assert!(!zeroed.broken_lunch);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetCalculation {
    /// The derived hourly rate (`daily_rate / base_day_hours`).
    pub hourly_rate: Decimal,
    /// Hours worked between pre-call and unit call.
    pub pre_call_hours: Decimal,
    /// Raw span from unit call to wrap, before the lunch deduction.
    pub raw_working_hours: Decimal,
    /// Working hours after the day type's lunch deduction.
    pub working_hours: Decimal,
    /// The lunch deduction applied for the day type.
    pub lunch_deduction: Decimal,
    /// The overtime threshold for the day type and base day length.
    pub ot_threshold: Decimal,
    /// Working hours paid at the base rate (capped at the OT threshold).
    pub base_hours: Decimal,
    /// Overtime hours, with late-night hours carved out.
    pub ot_hours: Decimal,
    /// Hours worked past 23:00, wrap-around adjusted.
    pub late_night_hours: Decimal,
    /// Pre-call hours plus working hours.
    pub total_hours: Decimal,
    /// Earnings for the pre-call span.
    pub pre_call_earnings: Decimal,
    /// Earnings for base hours at the hourly rate.
    pub daily_earnings: Decimal,
    /// Earnings for overtime hours at the overtime multiplier.
    pub ot_earnings: Decimal,
    /// Earnings for late-night hours at the late-night multiplier.
    pub late_night_earnings: Decimal,
    /// Sixth-day bonus on top of base earnings; zero on a seventh day.
    pub sixth_day_bonus: Decimal,
    /// Seventh-day bonus on top of base earnings.
    pub seventh_day_bonus: Decimal,
    /// Flat kit rental add-on, earned only by complete entries.
    pub kit_rental: Decimal,
    /// Sum of all earnings components above.
    pub total_earnings: Decimal,
    /// Advisory flag: lunch fell less than six hours after unit call.
    /// Does not change any monetary figure in this engine.
    pub broken_lunch: bool,
}
