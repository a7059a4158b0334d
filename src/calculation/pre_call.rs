//! Pre-call hours and earnings.
//!
//! Some departments are called before the general unit call; those hours
//! are paid at the hourly rate times the pre-call multiplier.

use rust_decimal::Decimal;

use super::clock::{ClockTime, hours_diff};

/// The result of the pre-call calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreCallResult {
    /// Hours between pre-call and unit call.
    pub hours: Decimal,
    /// Earnings for those hours (`hours * hourly_rate * multiplier`).
    pub earnings: Decimal,
}

/// Calculates pre-call hours and earnings.
///
/// With no pre-call (or an invalid one) both figures are zero. The span is
/// the forward difference from `pre_call` to `unit_call`, wrap-aware like
/// every other difference in the engine.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{calculate_pre_call, ClockTime};
/// use rust_decimal::Decimal;
///
/// let result = calculate_pre_call(
///     ClockTime::parse("06:00"),
///     ClockTime::parse("07:00"),
///     Decimal::from(30),
///     Decimal::ONE,
/// );
/// assert_eq!(result.hours, Decimal::ONE);
/// assert_eq!(result.earnings, Decimal::from(30));
/// ```
pub fn calculate_pre_call(
    pre_call: Option<ClockTime>,
    unit_call: Option<ClockTime>,
    hourly_rate: Decimal,
    multiplier: Decimal,
) -> PreCallResult {
    let hours = hours_diff(pre_call, unit_call);
    let earnings = hours * hourly_rate * multiplier;
    PreCallResult { hours, earnings }
}
