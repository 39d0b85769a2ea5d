// libs/calendar-cell/src/models.rs
use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

// ==============================================================================
// TIME-OF-DAY REPRESENTATION
// ==============================================================================

/// Wall-clock time as minutes since midnight. Parsed from "HH:MM" at the
/// wire boundary; all comparison logic stays on the integer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

/// Fallback working window for working days with no configured hours.
pub const DEFAULT_WINDOW_START: TimeOfDay = TimeOfDay(9 * 60);
pub const DEFAULT_WINDOW_END: TimeOfDay = TimeOfDay(18 * 60);

impl TimeOfDay {
    pub fn parse(value: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidTimeFormat(value.to_string());

        let (hours_part, minutes_part) = value.split_once(':').ok_or_else(invalid)?;
        if hours_part.len() != 2 || minutes_part.len() != 2 {
            return Err(invalid());
        }

        let hours: u16 = hours_part.parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes_part.parse().map_err(|_| invalid())?;
        if hours > 23 || minutes > 59 {
            return Err(invalid());
        }

        Ok(Self(hours * 60 + minutes))
    }

    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(Self(hours * 60 + minutes))
    }

    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    /// Step forward, returning None when the result would leave the day.
    pub fn add_minutes(self, minutes: u16) -> Option<Self> {
        let next = self.0 + minutes;
        if next >= 24 * 60 {
            None
        } else {
            Some(Self(next))
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        TimeOfDay::parse(&value).map_err(serde::de::Error::custom)
    }
}

// ==============================================================================
// WEEKLY SCHEDULE MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Map the host date primitive's weekday onto the schedule's symbolic
    /// day names. Kept as an explicit table so the wiring is auditable.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }
}

/// Per-weekday configuration of opening hours and the break window.
/// `start_time`/`end_time` are meaningful only when `is_working_day`;
/// a break exists only when both bounds are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRule {
    pub day_of_week: DayOfWeek,
    pub is_working_day: bool,
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
    #[serde(default)]
    pub break_start: Option<TimeOfDay>,
    #[serde(default)]
    pub break_end: Option<TimeOfDay>,
}

impl DayRule {
    pub fn working_window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        if !self.is_working_day {
            return None;
        }
        Some((
            self.start_time.unwrap_or(DEFAULT_WINDOW_START),
            self.end_time.unwrap_or(DEFAULT_WINDOW_END),
        ))
    }

    pub fn break_window(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        match (self.break_start, self.break_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Wire shape of the working-hours endpoint: one entry per day-of-week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyScheduleResponse {
    pub days: Vec<DayRule>,
}

/// Normalized, immutable schedule snapshot. Replaced wholesale on
/// refresh, never patched in place.
#[derive(Debug, Clone, Default)]
pub struct WeeklySchedule {
    rules: [Option<DayRule>; 7],
}

impl WeeklySchedule {
    pub fn from_rules(days: Vec<DayRule>) -> Self {
        let mut rules: [Option<DayRule>; 7] = Default::default();
        for rule in days {
            let idx = rule.day_of_week as usize;
            rules[idx] = Some(rule);
        }
        Self { rules }
    }

    pub fn from_response(response: WeeklyScheduleResponse) -> Self {
        Self::from_rules(response.days)
    }

    pub fn rule_for(&self, day: DayOfWeek) -> Option<&DayRule> {
        self.rules[day as usize].as_ref()
    }

    pub fn day_rules(&self) -> impl Iterator<Item = &DayRule> {
        self.rules.iter().filter_map(|rule| rule.as_ref())
    }
}

// ==============================================================================
// HOLIDAY MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub id: Uuid,
    pub name: String,
    pub holiday_date: NaiveDate,
    pub holiday_type: String,
    pub is_recurring: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Holidays for a bounded date window, keyed by exact calendar date.
/// Callers re-request when the window of interest moves.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    by_date: HashMap<NaiveDate, Holiday>,
}

impl HolidaySet {
    pub fn from_holidays(holidays: Vec<Holiday>) -> Self {
        let by_date = holidays
            .into_iter()
            .map(|holiday| (holiday.holiday_date, holiday))
            .collect();
        Self { by_date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    pub fn name_for(&self, date: NaiveDate) -> Option<&str> {
        self.by_date.get(&date).map(|holiday| holiday.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Holidays in ascending date order, for listing endpoints.
    pub fn sorted(&self) -> Vec<&Holiday> {
        let mut holidays: Vec<&Holiday> = self.by_date.values().collect();
        holidays.sort_by_key(|holiday| holiday.holiday_date);
        holidays
    }
}

// ==============================================================================
// QUERY RESULTS
// ==============================================================================

/// Why a calendar date cannot be booked. Precedence is past > holiday >
/// non-working day; a bookable date has no reason at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisabledReason {
    Past,
    Holiday(String),
    NonWorkingDay,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisabledReason::Past => write!(f, "past"),
            DisabledReason::Holiday(name) => write!(f, "holiday:{}", name),
            DisabledReason::NonWorkingDay => write!(f, "non_working_day"),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}
