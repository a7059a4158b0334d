//! Entry calculation orchestration.
//!
//! [`calculate_entry`] is the engine's core operation: a pure,
//! deterministic function from one rate card and one day's raw entry to
//! the full [`TimesheetCalculation`] breakdown. There is no error path:
//! incomplete entries return the all-zero calculation, malformed times
//! degrade the affected figures to zero, and unrecognized day types have
//! already degraded to SWD at the model boundary.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{RateCard, TimesheetCalculation, TimesheetEntry};

use super::broken_lunch::detect_broken_lunch;
use super::clock::parse_clock;
use super::day_rules::ot_threshold;
use super::late_night::late_night_hours;
use super::overtime::split_overtime;
use super::pre_call::calculate_pre_call;
use super::premium_day::calculate_premium_day;
use super::working_hours::calculate_working_hours;

/// Rounds an output figure to 2 decimal places.
///
/// The result always carries exactly two decimals so serialized output is
/// stable ("395.00", never "395.0").
fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Calculates the full hours and earnings breakdown for one entry.
///
/// An entry without both `unit_call` and `wrap_out` is incomplete and
/// returns [`TimesheetCalculation::default`]. Otherwise the steps run in
/// order: hourly rate, pre-call, working hours (raw span minus the day
/// type's lunch deduction), the advisory broken-lunch flag, late-night
/// hours (wrap-around adjusted), the base/overtime split with the
/// late-night carve-out, earnings per bucket, the mutually-exclusive
/// 6th/7th-day bonus on base earnings, and the kit rental add-on.
///
/// Every numeric field of the result is rounded to 2 decimal places at
/// return; `total_earnings` and `total_hours` are the exact sums of their
/// rounded components.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_entry;
/// use timesheet_engine::models::{DayKind, RateCard, TimesheetEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let card = RateCard {
///     daily_rate: dec("300"),
///     base_day_hours: dec("10"),
///     ot_multiplier: dec("1.5"),
///     pre_call_multiplier: dec("1.0"),
///     late_night_multiplier: dec("2.0"),
///     sixth_day_multiplier: dec("1.5"),
///     seventh_day_multiplier: dec("2.0"),
///     kit_rental: dec("20"),
/// };
/// let entry = TimesheetEntry {
///     pre_call: Some("06:00".to_string()),
///     unit_call: Some("07:00".to_string()),
///     wrap_out: Some("19:00".to_string()),
///     ..TimesheetEntry::new(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap())
/// };
///
/// let calc = calculate_entry(&card, &entry);
/// assert_eq!(calc.working_hours, dec("11"));
/// assert_eq!(calc.ot_hours, dec("1"));
/// assert_eq!(calc.total_earnings, dec("395"));
/// ```
pub fn calculate_entry(rate_card: &RateCard, entry: &TimesheetEntry) -> TimesheetCalculation {
    if !entry.is_complete() {
        return TimesheetCalculation::default();
    }

    let unit_call = parse_clock(entry.unit_call.as_deref());
    let wrap_out = parse_clock(entry.wrap_out.as_deref());
    let pre_call = parse_clock(entry.pre_call.as_deref());
    let call_sheet_lunch = parse_clock(entry.call_sheet_lunch.as_deref());
    let day = entry.day_type;

    let hourly_rate = rate_card.hourly_rate();

    let pre = calculate_pre_call(pre_call, unit_call, hourly_rate, rate_card.pre_call_multiplier);
    let working = calculate_working_hours(unit_call, wrap_out, day);
    let broken_lunch = detect_broken_lunch(day, unit_call, call_sheet_lunch);
    let late_night = late_night_hours(wrap_out);

    let threshold = ot_threshold(day, rate_card.base_day_hours);
    let split = split_overtime(working.working_hours, threshold, late_night);

    let daily_earnings = split.base_hours * hourly_rate;
    let ot_earnings = split.ot_hours * hourly_rate * rate_card.ot_multiplier;
    let late_night_earnings = late_night * hourly_rate * rate_card.late_night_multiplier;

    let base_earnings = pre.earnings + daily_earnings + ot_earnings + late_night_earnings;
    let bonus = calculate_premium_day(
        base_earnings,
        entry.is_sixth_day,
        entry.is_seventh_day,
        rate_card.sixth_day_multiplier,
        rate_card.seventh_day_multiplier,
    );

    // Round each field independently; the totals then sum the rounded
    // components so the emitted breakdown always adds up exactly.
    let pre_call_hours = round2(pre.hours);
    let working_hours = round2(working.working_hours);
    let pre_call_earnings = round2(pre.earnings);
    let daily_earnings = round2(daily_earnings);
    let ot_earnings = round2(ot_earnings);
    let late_night_earnings = round2(late_night_earnings);
    let sixth_day_bonus = round2(bonus.sixth_day_bonus);
    let seventh_day_bonus = round2(bonus.seventh_day_bonus);
    let kit_rental = round2(rate_card.kit_rental);

    TimesheetCalculation {
        hourly_rate: round2(hourly_rate),
        pre_call_hours,
        raw_working_hours: round2(working.raw_hours),
        working_hours,
        lunch_deduction: round2(working.lunch_deduction),
        ot_threshold: round2(threshold),
        base_hours: round2(split.base_hours),
        ot_hours: round2(split.ot_hours),
        late_night_hours: round2(late_night),
        total_hours: pre_call_hours + working_hours,
        pre_call_earnings,
        daily_earnings,
        ot_earnings,
        late_night_earnings,
        sixth_day_bonus,
        seventh_day_bonus,
        kit_rental,
        total_earnings: pre_call_earnings
            + daily_earnings
            + ot_earnings
            + late_night_earnings
            + sixth_day_bonus
            + seventh_day_bonus
            + kit_rental,
        broken_lunch,
    }
}
