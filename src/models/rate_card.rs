//! Rate card model.
//!
//! This module defines the [`RateCard`] struct holding a crew member's
//! agreed day rate and premium multipliers. One rate card exists per
//! user/project and is only changed by explicit update; the engine never
//! mutates it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A crew member's agreed day rate and premium multipliers.
///
/// Invariants (enforced by [`RateCard::validate`]): all multipliers are
/// at least 1.0 and `base_day_hours` is greater than zero.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::RateCard;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let card = RateCard {
///     daily_rate: Decimal::from_str("300").unwrap(),
///     base_day_hours: Decimal::from_str("10").unwrap(),
///     ot_multiplier: Decimal::from_str("1.5").unwrap(),
///     pre_call_multiplier: Decimal::ONE,
///     late_night_multiplier: Decimal::from_str("2.0").unwrap(),
///     sixth_day_multiplier: Decimal::from_str("1.5").unwrap(),
///     seventh_day_multiplier: Decimal::from_str("2.0").unwrap(),
///     kit_rental: Decimal::from_str("20").unwrap(),
/// };
/// assert!(card.validate().is_ok());
/// assert_eq!(card.hourly_rate(), Decimal::from_str("30").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    /// The agreed rate for one base day, in currency units.
    pub daily_rate: Decimal,
    /// The reference day length the daily rate buys (e.g. 10 or 11 hours).
    pub base_day_hours: Decimal,
    /// Multiplier applied to overtime hours.
    pub ot_multiplier: Decimal,
    /// Multiplier applied to pre-call hours.
    pub pre_call_multiplier: Decimal,
    /// Multiplier applied to hours worked past 23:00.
    pub late_night_multiplier: Decimal,
    /// Multiplier applied to a sixth consecutive working day.
    pub sixth_day_multiplier: Decimal,
    /// Multiplier applied to a seventh consecutive working day.
    pub seventh_day_multiplier: Decimal,
    /// Flat daily fee for use of the crew member's own equipment.
    #[serde(default)]
    pub kit_rental: Decimal,
}

impl RateCard {
    /// Returns the derived hourly rate (`daily_rate / base_day_hours`).
    ///
    /// Returns zero when `base_day_hours` is zero so that the calculation
    /// path stays total even on a card that skipped [`RateCard::validate`].
    pub fn hourly_rate(&self) -> Decimal {
        if self.base_day_hours.is_zero() {
            return Decimal::ZERO;
        }
        self.daily_rate / self.base_day_hours
    }

    /// Validates the rate card invariants.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRateCard`] naming the first offending
    /// field if `base_day_hours` is not positive or any multiplier is
    /// below 1.0.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_day_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidRateCard {
                field: "baseDayHours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let multipliers = [
            ("otMultiplier", self.ot_multiplier),
            ("preCallMultiplier", self.pre_call_multiplier),
            ("lateNightMultiplier", self.late_night_multiplier),
            ("sixthDayMultiplier", self.sixth_day_multiplier),
            ("seventhDayMultiplier", self.seventh_day_multiplier),
        ];
        for (field, value) in multipliers {
            if value < Decimal::ONE {
                return Err(EngineError::InvalidRateCard {
                    field: field.to_string(),
                    message: format!("multiplier {} is below 1.0", value),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard_card() -> RateCard {
        RateCard {
            daily_rate: dec("300"),
            base_day_hours: dec("10"),
            ot_multiplier: dec("1.5"),
            pre_call_multiplier: dec("1.0"),
            late_night_multiplier: dec("2.0"),
            sixth_day_multiplier: dec("1.5"),
            seventh_day_multiplier: dec("2.0"),
            kit_rental: dec("20"),
        }
    }

    #[test]
    fn test_hourly_rate_is_daily_rate_over_base_day_hours() {
        assert_eq!(standard_card().hourly_rate(), dec("30"));
    }

    #[test]
    fn test_hourly_rate_with_eleven_hour_base_day() {
        let card = RateCard {
            daily_rate: dec("550"),
            base_day_hours: dec("11"),
            ..standard_card()
        };
        assert_eq!(card.hourly_rate(), dec("50"));
    }

    #[test]
    fn test_hourly_rate_zero_base_day_hours_is_zero() {
        let card = RateCard {
            base_day_hours: Decimal::ZERO,
            ..standard_card()
        };
        assert_eq!(card.hourly_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_validate_accepts_standard_card() {
        assert!(standard_card().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_base_day_hours() {
        let card = RateCard {
            base_day_hours: Decimal::ZERO,
            ..standard_card()
        };
        let err = card.validate().unwrap_err();
        assert!(err.to_string().contains("baseDayHours"));
    }

    #[test]
    fn test_validate_rejects_multiplier_below_one() {
        let card = RateCard {
            ot_multiplier: dec("0.9"),
            ..standard_card()
        };
        let err = card.validate().unwrap_err();
        assert!(err.to_string().contains("otMultiplier"));
    }

    #[test]
    fn test_validate_accepts_multiplier_of_exactly_one() {
        let card = RateCard {
            ot_multiplier: Decimal::ONE,
            late_night_multiplier: Decimal::ONE,
            ..standard_card()
        };
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_serialization_uses_camel_case_field_names() {
        let json = serde_json::to_value(standard_card()).unwrap();
        assert!(json.get("dailyRate").is_some());
        assert!(json.get("baseDayHours").is_some());
        assert!(json.get("otMultiplier").is_some());
        assert!(json.get("kitRental").is_some());
    }

    #[test]
    fn test_deserialization_defaults_kit_rental_to_zero() {
        let json = r#"{
            "dailyRate": "300",
            "baseDayHours": "10",
            "otMultiplier": "1.5",
            "preCallMultiplier": "1.0",
            "lateNightMultiplier": "2.0",
            "sixthDayMultiplier": "1.5",
            "seventhDayMultiplier": "2.0"
        }"#;
        let card: RateCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.kit_rental, Decimal::ZERO);
    }

    #[test]
    fn test_round_trip() {
        let card = standard_card();
        let json = serde_json::to_string(&card).unwrap();
        let back: RateCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
