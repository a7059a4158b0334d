//! Month aggregation.
//!
//! A month summary spans every day of a calendar month, folding the
//! entries that exist through the entry calculator exactly like the week
//! aggregator does.

use chrono::{Datelike, Days, NaiveDate};
use tracing::debug;

use crate::calculation::calculate_entry;
use crate::models::{DaySummary, MonthSummary, RateCard, SummaryTotals};
use crate::repository::EntryStore;

/// Aggregates a calendar month into a [`MonthSummary`].
///
/// Walks every date of the month, gathers the entries that exist, runs
/// each through the entry calculator, and sums every output field
/// independently. An invalid year/month combination (e.g. month 13)
/// yields an empty summary rather than an error, consistent with the
/// engine's no-fatal-path posture.
pub fn month_summary(
    rate_card: &RateCard,
    store: &impl EntryStore,
    year: i32,
    month: u32,
) -> MonthSummary {
    let mut totals = SummaryTotals::default();
    let mut days = Vec::new();

    let mut cursor = NaiveDate::from_ymd_opt(year, month, 1);
    while let Some(date) = cursor {
        if date.year() != year || date.month() != month {
            break;
        }
        if let Some(entry) = store.entry(date) {
            let calculation = calculate_entry(rate_card, entry);
            totals.add(&calculation);
            days.push(DaySummary { date, calculation });
        }
        cursor = date.checked_add_days(Days::new(1));
    }

    debug!(year, month, days_logged = totals.days_logged, "aggregated month");

    MonthSummary {
        year,
        month,
        totals,
        days,
    }
}
