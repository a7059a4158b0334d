//! Timesheet Calculation Engine for UK film and TV crew day rates
//!
//! This crate computes a crew member's daily working hours and pay from raw
//! call-time records under UK film-industry day-rate rules (Standard,
//! Short-Continuous, and Continuous Working Day), including overnight wrap,
//! broken-lunch detection, late-night premiums, and 6th/7th-day bonuses.

#![warn(missing_docs)]

pub mod aggregation;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
