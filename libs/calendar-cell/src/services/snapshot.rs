// libs/calendar-cell/src/services/snapshot.rs
use chrono::{Datelike, Months, NaiveDate};
use reqwest::Method;
use tracing::{debug, warn};

use shared_backend::PracticeApiClient;
use shared_config::AppConfig;

use crate::models::{CalendarError, Holiday, HolidaySet, WeeklySchedule, WeeklyScheduleResponse};

/// Fetches the two read-only snapshots the constraint evaluator consumes.
/// Each fetch returns a fresh, normalized value; caching and supersession
/// of stale responses are the caller's responsibility.
pub struct ScheduleSnapshotService {
    backend: PracticeApiClient,
}

impl ScheduleSnapshotService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            backend: PracticeApiClient::new(config),
        }
    }

    /// Fetch the weekly working-hours configuration and normalize it for
    /// per-weekday lookup. Malformed "HH:MM" fields are rejected here, at
    /// the boundary, before any pure query can see them.
    pub async fn fetch_weekly_schedule(&self) -> Result<WeeklySchedule, CalendarError> {
        debug!("Fetching weekly schedule snapshot");

        let response: WeeklyScheduleResponse = self
            .backend
            .request(Method::GET, "/api/v1/working-hours", None)
            .await
            .map_err(|e| CalendarError::BackendError(e.to_string()))?;

        if response.days.len() != 7 {
            warn!(
                "Weekly schedule has {} day rules, expected 7",
                response.days.len()
            );
        }

        Ok(WeeklySchedule::from_response(response))
    }

    /// Fetch holidays for the sliding window anchored at `anchor_month`:
    /// that month plus `window_months` trailing months.
    pub async fn fetch_holidays(
        &self,
        anchor_month: NaiveDate,
        window_months: u32,
    ) -> Result<HolidaySet, CalendarError> {
        let (from, to) = holiday_window(anchor_month, window_months);
        debug!("Fetching holidays from {} to {}", from, to);

        let path = format!("/api/v1/holidays?from={}&to={}", from, to);
        let holidays: Vec<Holiday> = self
            .backend
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| CalendarError::BackendError(e.to_string()))?;

        debug!("Fetched {} holidays", holidays.len());
        Ok(HolidaySet::from_holidays(holidays))
    }
}

/// Inclusive date bounds of the holiday lookup window: the first day of
/// the anchor's month through the last day of the month `window_months`
/// later.
pub fn holiday_window(anchor_month: NaiveDate, window_months: u32) -> (NaiveDate, NaiveDate) {
    let from = anchor_month.with_day(1).unwrap_or(anchor_month);
    let to = from
        .checked_add_months(Months::new(window_months + 1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(from);
    (from, to)
}
