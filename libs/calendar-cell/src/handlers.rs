// libs/calendar-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::CalendarError;
use crate::services::{ConstraintEvaluator, ScheduleSnapshotService};

#[derive(Debug, Deserialize)]
pub struct HolidayWindowQuery {
    pub month: NaiveDate,
    pub window_months: Option<u32>,
}

#[axum::debug_handler]
pub async fn get_weekly_schedule(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let snapshot_service = ScheduleSnapshotService::new(&state);

    let schedule = snapshot_service
        .fetch_weekly_schedule()
        .await
        .map_err(map_calendar_error)?;

    let days: Vec<_> = schedule.day_rules().collect();
    Ok(Json(json!({ "days": days })))
}

#[axum::debug_handler]
pub async fn list_holidays(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<HolidayWindowQuery>,
) -> Result<Json<Value>, AppError> {
    let snapshot_service = ScheduleSnapshotService::new(&state);
    let window_months = query.window_months.unwrap_or(state.holiday_window_months);

    let holidays = snapshot_service
        .fetch_holidays(query.month, window_months)
        .await
        .map_err(map_calendar_error)?;

    Ok(Json(json!({
        "holidays": holidays.sorted(),
        "total": holidays.len()
    })))
}

#[axum::debug_handler]
pub async fn get_date_status(
    State(state): State<Arc<AppConfig>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Value>, AppError> {
    let snapshot_service = ScheduleSnapshotService::new(&state);

    let schedule = snapshot_service
        .fetch_weekly_schedule()
        .await
        .map_err(map_calendar_error)?;
    let holidays = snapshot_service
        .fetch_holidays(date, state.holiday_window_months)
        .await
        .map_err(map_calendar_error)?;

    let evaluator = ConstraintEvaluator::new();
    let today = Utc::now().date_naive();
    let reason = evaluator.disabled_reason(date, today, Some(&schedule), &holidays);

    Ok(Json(json!({
        "date": date,
        "disabled": reason.is_some(),
        "reason": reason.map(|r| r.to_string())
    })))
}

#[axum::debug_handler]
pub async fn get_day_slots(
    State(state): State<Arc<AppConfig>>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<Value>, AppError> {
    let snapshot_service = ScheduleSnapshotService::new(&state);

    let schedule = snapshot_service
        .fetch_weekly_schedule()
        .await
        .map_err(map_calendar_error)?;

    let evaluator = ConstraintEvaluator::new();
    let slots: Vec<String> = evaluator
        .time_slots(date, Some(&schedule))
        .into_iter()
        .map(|slot| slot.to_string())
        .collect();

    Ok(Json(json!({
        "date": date,
        "slots": slots
    })))
}

fn map_calendar_error(error: CalendarError) -> AppError {
    match error {
        CalendarError::InvalidTimeFormat(msg) => AppError::ValidationError(msg),
        CalendarError::InvalidSchedule(msg) => AppError::BadRequest(msg),
        CalendarError::BackendError(msg) => AppError::ExternalService(msg),
    }
}
