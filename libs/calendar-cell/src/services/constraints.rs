// libs/calendar-cell/src/services/constraints.rs
use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    DayOfWeek, DisabledReason, HolidaySet, TimeOfDay, WeeklySchedule,
};

/// Bookable slots start on a fixed 15-minute grid.
pub const SLOT_INTERVAL_MINUTES: u16 = 15;

/// Pure date/time legality queries against a schedule snapshot and a
/// holiday set. Holds no state and performs no I/O; "today" is always an
/// explicit parameter so results are deterministic under test.
///
/// A missing schedule (or a weekday with no rule) is permissive for the
/// disabled checks but yields no slots - the caller gates interaction on
/// its own loading flag until snapshots have resolved.
pub struct ConstraintEvaluator {
    slot_interval_minutes: u16,
}

impl Default for ConstraintEvaluator {
    fn default() -> Self {
        Self {
            slot_interval_minutes: SLOT_INTERVAL_MINUTES,
        }
    }
}

impl ConstraintEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `date` cannot be booked: in the past (day granularity),
    /// a holiday, or a non-working weekday. Pure OR of the three checks.
    pub fn is_date_disabled(
        &self,
        date: NaiveDate,
        today: NaiveDate,
        schedule: Option<&WeeklySchedule>,
        holidays: &HolidaySet,
    ) -> bool {
        self.disabled_reason(date, today, schedule, holidays).is_some()
    }

    /// Why `date` is disabled, first match wins: past, then holiday, then
    /// non-working day. None means the date is bookable. The past-date
    /// rule applies even when no schedule has loaded.
    pub fn disabled_reason(
        &self,
        date: NaiveDate,
        today: NaiveDate,
        schedule: Option<&WeeklySchedule>,
        holidays: &HolidaySet,
    ) -> Option<DisabledReason> {
        if date < today {
            return Some(DisabledReason::Past);
        }

        if let Some(name) = holidays.name_for(date) {
            return Some(DisabledReason::Holiday(name.to_string()));
        }

        if let Some(rule) = schedule.and_then(|s| s.rule_for(DayOfWeek::from_date(date))) {
            if !rule.is_working_day {
                return Some(DisabledReason::NonWorkingDay);
            }
        }

        None
    }

    /// Slot start times for `date`, ascending, stepping the fixed interval
    /// from the day's start (inclusive) up to its end (exclusive) and
    /// skipping the break window. Non-working days and missing rules yield
    /// an empty list rather than an error.
    pub fn time_slots(&self, date: NaiveDate, schedule: Option<&WeeklySchedule>) -> Vec<TimeOfDay> {
        let rule = match schedule.and_then(|s| s.rule_for(DayOfWeek::from_date(date))) {
            Some(rule) => rule,
            None => return Vec::new(),
        };

        let (start, end) = match rule.working_window() {
            Some(window) => window,
            None => return Vec::new(),
        };

        let break_window = rule.break_window();

        let mut slots = Vec::new();
        let mut current = start;
        while current < end {
            let in_break = break_window
                .map(|(break_start, break_end)| current >= break_start && current < break_end)
                .unwrap_or(false);

            if !in_break {
                slots.push(current);
            }

            current = match current.add_minutes(self.slot_interval_minutes) {
                Some(next) => next,
                None => break,
            };
        }

        debug!("Generated {} slots for {}", slots.len(), date);
        slots
    }

    /// True iff `time` falls in the day's `[break_start, break_end)`.
    /// False when the day has no configured break or no rule at all.
    pub fn is_time_in_break(
        &self,
        date: NaiveDate,
        time: TimeOfDay,
        schedule: Option<&WeeklySchedule>,
    ) -> bool {
        schedule
            .and_then(|s| s.rule_for(DayOfWeek::from_date(date)))
            .and_then(|rule| rule.break_window())
            .map(|(break_start, break_end)| time >= break_start && time < break_end)
            .unwrap_or(false)
    }
}
