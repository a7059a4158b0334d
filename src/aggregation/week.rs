//! Week aggregation.
//!
//! A week summary spans 7 consecutive dates from a Monday anchor. Any
//! anchor date snaps back to the Monday of its week, so callers need not
//! pre-align.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::calculation::calculate_entry;
use crate::models::{DaySummary, RateCard, SummaryTotals, WeekSummary};
use crate::repository::EntryStore;

/// Returns the Monday of the week containing `date`.
///
/// # Example
///
/// ```
/// use timesheet_engine::aggregation::monday_of;
/// use chrono::NaiveDate;
///
/// // 2026-03-05 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
/// let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
/// assert_eq!(monday_of(thursday), monday);
/// ```
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let days_back = date.weekday().num_days_from_monday();
    date - Days::new(u64::from(days_back))
}

/// Aggregates the week containing `anchor` into a [`WeekSummary`].
///
/// Gathers up to 7 entries from the store, runs each through the entry
/// calculator, and sums every output field independently. Incomplete
/// entries contribute zero to every figure but still count toward
/// `days_logged`; kit rental flows only through days with both unit call
/// and wrap set, because only those days calculate to a nonzero kit
/// rental.
pub fn week_summary(
    rate_card: &RateCard,
    store: &impl EntryStore,
    anchor: NaiveDate,
) -> WeekSummary {
    let week_start = monday_of(anchor);
    let mut totals = SummaryTotals::default();
    let mut days = Vec::new();

    for offset in 0..7u64 {
        let date = week_start + Days::new(offset);
        let Some(entry) = store.entry(date) else {
            continue;
        };
        let calculation = calculate_entry(rate_card, entry);
        totals.add(&calculation);
        days.push(DaySummary { date, calculation });
    }

    debug!(
        week_start = %week_start,
        days_logged = totals.days_logged,
        "aggregated week"
    );

    WeekSummary {
        week_start,
        totals,
        days,
    }
}
