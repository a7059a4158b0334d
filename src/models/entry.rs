//! Timesheet entry model and day-type tag.
//!
//! This module defines the [`TimesheetEntry`] struct representing one
//! calendar day of raw call-time data, and the [`DayKind`] tag describing
//! which UK film-industry day-rate arrangement applies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The working-day arrangement for a timesheet entry.
///
/// UK film crew shift types differ in lunch-break handling and overtime
/// threshold. Unrecognized tags degrade to [`DayKind::Swd`] rather than
/// failing, so a free-text label that slipped past ingestion never breaks
/// a calculation.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::DayKind;
///
/// assert_eq!(DayKind::from_tag("SCWD"), DayKind::Scwd);
/// assert_eq!(DayKind::from_tag("scwd"), DayKind::Scwd);
/// assert_eq!(DayKind::from_tag("anything else"), DayKind::Swd);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", from = "String")]
pub enum DayKind {
    /// Standard Working Day: one unpaid lunch hour, overtime past the full
    /// reference day length.
    #[default]
    Swd,
    /// Short-Continuous Working Day: half-hour lunch deduction, overtime
    /// threshold shortened by half an hour.
    Scwd,
    /// Continuous Working Day: working lunch is paid, overtime threshold
    /// shortened by a full hour.
    Cwd,
}

impl DayKind {
    /// Maps a normalized day-type tag to its [`DayKind`].
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything other than `SCWD` or `CWD` maps to [`DayKind::Swd`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "SCWD" => DayKind::Scwd,
            "CWD" => DayKind::Cwd,
            _ => DayKind::Swd,
        }
    }

    /// Returns the wire tag for this day kind.
    pub fn tag(&self) -> &'static str {
        match self {
            DayKind::Swd => "SWD",
            DayKind::Scwd => "SCWD",
            DayKind::Cwd => "CWD",
        }
    }
}

impl From<String> for DayKind {
    fn from(tag: String) -> Self {
        DayKind::from_tag(&tag)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One calendar day of raw call-time data for a crew member.
///
/// Entries are created either by manual entry or by auto-fill from a call
/// sheet, and are mutated by the user until finalized. Times are
/// pre-normalized `"HH:MM"` 24-hour strings within a single nominal 24h
/// cycle; `wrap_out` may represent a time after midnight relative to
/// `unit_call` (handled by wrap-around, not by date rollover). An entry
/// without both `unit_call` and `wrap_out` is incomplete and calculates
/// to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntry {
    /// The calendar date this entry covers.
    pub date: NaiveDate,
    /// Earlier call time for specific departments before the unit call.
    #[serde(default)]
    pub pre_call: Option<String>,
    /// Scheduled start-of-work time for the crew.
    #[serde(default)]
    pub unit_call: Option<String>,
    /// End-of-work time; may land after midnight.
    #[serde(default)]
    pub wrap_out: Option<String>,
    /// The working-day arrangement for this entry.
    #[serde(default)]
    pub day_type: DayKind,
    /// Whether this is a sixth consecutive working day.
    #[serde(default)]
    pub is_sixth_day: bool,
    /// Whether this is a seventh consecutive working day.
    #[serde(default)]
    pub is_seventh_day: bool,
    /// Reference lunch time from the call sheet, for broken-lunch detection.
    #[serde(default)]
    pub call_sheet_lunch: Option<String>,
    /// Optional link back to a production shoot day.
    #[serde(default)]
    pub production_day: Option<String>,
}

impl TimesheetEntry {
    /// Creates an entry for a date with every other field empty.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            pre_call: None,
            unit_call: None,
            wrap_out: None,
            day_type: DayKind::Swd,
            is_sixth_day: false,
            is_seventh_day: false,
            call_sheet_lunch: None,
            production_day: None,
        }
    }

    /// Whether the entry has both `unit_call` and `wrap_out` set.
    ///
    /// Incomplete entries calculate to zero and earn no kit rental.
    pub fn is_complete(&self) -> bool {
        self.unit_call.is_some() && self.wrap_out.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_day_kind_from_recognized_tags() {
        assert_eq!(DayKind::from_tag("SWD"), DayKind::Swd);
        assert_eq!(DayKind::from_tag("SCWD"), DayKind::Scwd);
        assert_eq!(DayKind::from_tag("CWD"), DayKind::Cwd);
    }

    #[test]
    fn test_day_kind_is_case_insensitive() {
        assert_eq!(DayKind::from_tag("cwd"), DayKind::Cwd);
        assert_eq!(DayKind::from_tag(" scwd "), DayKind::Scwd);
    }

    #[test]
    fn test_unknown_tag_defaults_to_swd() {
        assert_eq!(DayKind::from_tag(""), DayKind::Swd);
        assert_eq!(DayKind::from_tag("Short Continuous"), DayKind::Swd);
        assert_eq!(DayKind::from_tag("???"), DayKind::Swd);
    }

    #[test]
    fn test_day_kind_display_matches_wire_tag() {
        assert_eq!(DayKind::Swd.to_string(), "SWD");
        assert_eq!(DayKind::Scwd.to_string(), "SCWD");
        assert_eq!(DayKind::Cwd.to_string(), "CWD");
    }

    #[test]
    fn test_day_kind_serializes_to_tag() {
        let json = serde_json::to_string(&DayKind::Scwd).unwrap();
        assert_eq!(json, "\"SCWD\"");
    }

    #[test]
    fn test_day_kind_deserializes_unknown_to_swd() {
        let kind: DayKind = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(kind, DayKind::Swd);
    }

    #[test]
    fn test_new_entry_is_incomplete() {
        let entry = TimesheetEntry::new(make_date("2026-03-02"));
        assert!(!entry.is_complete());
        assert_eq!(entry.day_type, DayKind::Swd);
    }

    #[test]
    fn test_entry_with_call_and_wrap_is_complete() {
        let entry = TimesheetEntry {
            unit_call: Some("07:00".to_string()),
            wrap_out: Some("19:00".to_string()),
            ..TimesheetEntry::new(make_date("2026-03-02"))
        };
        assert!(entry.is_complete());
    }

    #[test]
    fn test_entry_missing_wrap_is_incomplete() {
        let entry = TimesheetEntry {
            unit_call: Some("07:00".to_string()),
            ..TimesheetEntry::new(make_date("2026-03-02"))
        };
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_entry_deserializes_with_camel_case_names_and_defaults() {
        let json = r#"{
            "date": "2026-03-02",
            "unitCall": "07:00",
            "wrapOut": "19:00",
            "dayType": "SCWD"
        }"#;
        let entry: TimesheetEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.day_type, DayKind::Scwd);
        assert_eq!(entry.pre_call, None);
        assert!(!entry.is_sixth_day);
        assert!(!entry.is_seventh_day);
        assert_eq!(entry.production_day, None);
    }

    #[test]
    fn test_entry_round_trip() {
        let entry = TimesheetEntry {
            pre_call: Some("06:00".to_string()),
            unit_call: Some("07:00".to_string()),
            wrap_out: Some("19:00".to_string()),
            day_type: DayKind::Cwd,
            is_sixth_day: true,
            call_sheet_lunch: Some("13:00".to_string()),
            production_day: Some("day_12".to_string()),
            ..TimesheetEntry::new(make_date("2026-03-07"))
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: TimesheetEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
