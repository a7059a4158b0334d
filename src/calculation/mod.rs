//! Calculation logic for the Timesheet Calculation Engine.
//!
//! This module contains all the calculation functions for determining a
//! day's pay: wall-clock parsing and forward differences, the day-type
//! lunch and overtime threshold tables, pre-call pay, working hours,
//! advisory broken-lunch detection, late-night hours past 23:00, the
//! base/overtime split with the late-night carve-out, 6th/7th-day
//! bonuses, and the entry calculation that ties them together.

mod broken_lunch;
mod clock;
mod day_rules;
mod entry_calc;
mod late_night;
mod overtime;
mod pre_call;
mod premium_day;
mod working_hours;

pub use broken_lunch::{BROKEN_LUNCH_WINDOW, detect_broken_lunch};
pub use clock::{ClockTime, hours_diff, parse_clock};
pub use day_rules::{
    SCWD_LUNCH_DEDUCTION, SWD_LUNCH_DEDUCTION, lunch_deduction, ot_threshold,
};
pub use entry_calc::calculate_entry;
pub use late_night::{
    EARLY_MORNING_CUTOFF, LATE_NIGHT_START, adjusted_wrap_hours, late_night_hours,
};
pub use overtime::{OvertimeSplit, split_overtime};
pub use pre_call::{PreCallResult, calculate_pre_call};
pub use premium_day::{PremiumDayBonus, calculate_premium_day};
pub use working_hours::{WorkingHoursResult, calculate_working_hours};
