//! Rate card configuration for the Timesheet Calculation Engine.
//!
//! This module provides loading of [`RateCard`](crate::models::RateCard)
//! configuration from YAML files, with the card's invariants validated at
//! load time.

mod loader;

pub use loader::ConfigLoader;
