//! Period summary models.
//!
//! This module defines the aggregated outputs of the week and month
//! aggregators: [`SummaryTotals`] plus the [`WeekSummary`] and
//! [`MonthSummary`] wrappers carrying the contributing days. Summaries are
//! computed on read and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimesheetCalculation;

/// One contributing day inside a period summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// The calendar date of the entry.
    pub date: NaiveDate,
    /// The calculation derived for that entry.
    pub calculation: TimesheetCalculation,
}

/// Aggregated hour and earnings totals across a period.
///
/// Each field is the independent sum of the corresponding per-day figure.
/// Per-day figures are already rounded to 2 decimal places, and the sums
/// are taken over those rounded values (preserved source behavior).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTotals {
    /// Sum of per-day total hours.
    pub total_hours: Decimal,
    /// Sum of per-day pre-call hours.
    pub pre_call_hours: Decimal,
    /// Sum of per-day working hours.
    pub working_hours: Decimal,
    /// Sum of per-day base hours.
    pub base_hours: Decimal,
    /// Sum of per-day overtime hours.
    pub ot_hours: Decimal,
    /// Sum of per-day late-night hours.
    pub late_night_hours: Decimal,
    /// Sum of per-day pre-call earnings.
    pub pre_call_earnings: Decimal,
    /// Sum of per-day daily earnings.
    pub daily_earnings: Decimal,
    /// Sum of per-day overtime earnings.
    pub ot_earnings: Decimal,
    /// Sum of per-day late-night earnings.
    pub late_night_earnings: Decimal,
    /// Sum of per-day sixth-day bonuses.
    pub sixth_day_bonus: Decimal,
    /// Sum of per-day seventh-day bonuses.
    pub seventh_day_bonus: Decimal,
    /// Sum of kit rental over days with both unit call and wrap set.
    pub kit_rental: Decimal,
    /// Sum of per-day total earnings.
    pub total_earnings: Decimal,
    /// Number of dates in the period with an entry in the store,
    /// complete or not.
    pub days_logged: u32,
}

impl SummaryTotals {
    /// Folds one day's calculation into the totals.
    pub fn add(&mut self, calculation: &TimesheetCalculation) {
        self.total_hours += calculation.total_hours;
        self.pre_call_hours += calculation.pre_call_hours;
        self.working_hours += calculation.working_hours;
        self.base_hours += calculation.base_hours;
        self.ot_hours += calculation.ot_hours;
        self.late_night_hours += calculation.late_night_hours;
        self.pre_call_earnings += calculation.pre_call_earnings;
        self.daily_earnings += calculation.daily_earnings;
        self.ot_earnings += calculation.ot_earnings;
        self.late_night_earnings += calculation.late_night_earnings;
        self.sixth_day_bonus += calculation.sixth_day_bonus;
        self.seventh_day_bonus += calculation.seventh_day_bonus;
        self.kit_rental += calculation.kit_rental;
        self.total_earnings += calculation.total_earnings;
        self.days_logged += 1;
    }
}

/// Aggregated totals for 7 consecutive dates from a Monday anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    /// The Monday the week starts on.
    pub week_start: NaiveDate,
    /// Aggregated totals across the week.
    pub totals: SummaryTotals,
    /// The contributing entries, in date order.
    pub days: Vec<DaySummary>,
}

/// Aggregated totals for every day of a calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Aggregated totals across the month.
    pub totals: SummaryTotals,
    /// The contributing entries, in date order.
    pub days: Vec<DaySummary>,
}
