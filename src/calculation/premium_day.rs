//! Sixth and seventh consecutive-day bonuses.
//!
//! A sixth or seventh working day in a row pays a bonus on top of the
//! day's base earnings (pre-call, daily, overtime, and late-night
//! earnings). Seventh-day status takes precedence; the two bonuses are
//! mutually exclusive and are never both applied.

use rust_decimal::Decimal;

/// The result of the premium-day bonus calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumDayBonus {
    /// Bonus for a sixth consecutive working day; zero on a seventh day.
    pub sixth_day_bonus: Decimal,
    /// Bonus for a seventh consecutive working day.
    pub seventh_day_bonus: Decimal,
}

/// Calculates the sixth/seventh-day bonus on base earnings.
///
/// The bonus is `base_earnings * (multiplier - 1)`: the multiplier scales
/// the whole day, and the bonus is the increment over what was already
/// paid. On a seventh day only the seventh-day bonus applies, even if the
/// entry also carries the sixth-day flag.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_premium_day;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let bonus = calculate_premium_day(dec("375"), true, false, dec("1.5"), dec("2.0"));
/// assert_eq!(bonus.sixth_day_bonus, dec("187.5"));
/// assert_eq!(bonus.seventh_day_bonus, Decimal::ZERO);
/// ```
pub fn calculate_premium_day(
    base_earnings: Decimal,
    is_sixth_day: bool,
    is_seventh_day: bool,
    sixth_day_multiplier: Decimal,
    seventh_day_multiplier: Decimal,
) -> PremiumDayBonus {
    let mut bonus = PremiumDayBonus {
        sixth_day_bonus: Decimal::ZERO,
        seventh_day_bonus: Decimal::ZERO,
    };

    if is_seventh_day {
        bonus.seventh_day_bonus = base_earnings * (seventh_day_multiplier - Decimal::ONE);
    } else if is_sixth_day {
        bonus.sixth_day_bonus = base_earnings * (sixth_day_multiplier - Decimal::ONE);
    }

    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // PD-001: ordinary day earns no bonus
    // ==========================================================================
    #[test]
    fn test_pd_001_ordinary_day_no_bonus() {
        let bonus = calculate_premium_day(dec("375"), false, false, dec("1.5"), dec("2.0"));
        assert_eq!(bonus.sixth_day_bonus, Decimal::ZERO);
        assert_eq!(bonus.seventh_day_bonus, Decimal::ZERO);
    }

    // ==========================================================================
    // PD-002: sixth day bonus is the increment over 1.0
    // ==========================================================================
    #[test]
    fn test_pd_002_sixth_day_bonus() {
        let bonus = calculate_premium_day(dec("400"), true, false, dec("1.5"), dec("2.0"));
        assert_eq!(bonus.sixth_day_bonus, dec("200"));
        assert_eq!(bonus.seventh_day_bonus, Decimal::ZERO);
    }

    // ==========================================================================
    // PD-003: seventh day bonus
    // ==========================================================================
    #[test]
    fn test_pd_003_seventh_day_bonus() {
        let bonus = calculate_premium_day(dec("400"), false, true, dec("1.5"), dec("2.0"));
        assert_eq!(bonus.sixth_day_bonus, Decimal::ZERO);
        assert_eq!(bonus.seventh_day_bonus, dec("400"));
    }

    // ==========================================================================
    // PD-004: seventh-day status wins when both flags are set (property P5)
    // ==========================================================================
    #[test]
    fn test_pd_004_seventh_day_takes_precedence() {
        let bonus = calculate_premium_day(dec("400"), true, true, dec("1.5"), dec("2.0"));
        assert_eq!(bonus.sixth_day_bonus, Decimal::ZERO);
        assert_eq!(bonus.seventh_day_bonus, dec("400"));
    }

    #[test]
    fn test_multiplier_of_one_earns_nothing() {
        let bonus = calculate_premium_day(dec("400"), true, false, dec("1.0"), dec("1.0"));
        assert_eq!(bonus.sixth_day_bonus, Decimal::ZERO);
    }

    #[test]
    fn test_zero_base_earnings_earn_zero_bonus() {
        let bonus = calculate_premium_day(Decimal::ZERO, true, true, dec("1.5"), dec("2.0"));
        assert_eq!(bonus.seventh_day_bonus, Decimal::ZERO);
    }
}
