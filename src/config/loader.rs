//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rate card
//! from a YAML file. Loading is the only fallible surface in the crate:
//! the file must exist, parse, and satisfy the rate card invariants.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::RateCard;

/// Loads and provides access to a crew member's rate card.
///
/// # File format
///
/// ```yaml
/// dailyRate: "300"
/// baseDayHours: "10"
/// otMultiplier: "1.5"
/// preCallMultiplier: "1.0"
/// lateNightMultiplier: "2.0"
/// sixthDayMultiplier: "1.5"
/// seventhDayMultiplier: "2.0"
/// kitRental: "20"
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rate_card.yaml")?;
/// println!("Day rate: {}", loader.rate_card().daily_rate);
/// # Ok::<(), timesheet_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rate_card: RateCard,
}

impl ConfigLoader {
    /// Loads a rate card from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file cannot be read
    /// - [`EngineError::ConfigParseError`] if the YAML does not parse
    /// - [`EngineError::InvalidRateCard`] if an invariant fails
    ///   (`baseDayHours` not positive, or any multiplier below 1.0)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rate_card: RateCard =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        rate_card.validate()?;

        info!(path = %path_str, daily_rate = %rate_card.daily_rate, "loaded rate card");

        Ok(Self { rate_card })
    }

    /// Returns the loaded rate card.
    pub fn rate_card(&self) -> &RateCard {
        &self.rate_card
    }
}
