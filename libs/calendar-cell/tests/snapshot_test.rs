// libs/calendar-cell/tests/snapshot_test.rs
use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use calendar_cell::models::{CalendarError, DayOfWeek, TimeOfDay};
use calendar_cell::services::{holiday_window, ScheduleSnapshotService};
use shared_config::AppConfig;

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        backend_url: base_url.to_string(),
        backend_api_key: "test-api-key".to_string(),
        holiday_window_months: 2,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn fetches_and_normalizes_weekly_schedule() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/working-hours"))
        .and(header("x-api-key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "days": [
                {"day_of_week": "MONDAY", "is_working_day": true,
                 "start_time": "09:00", "end_time": "18:00",
                 "break_start": "13:00", "break_end": "14:00"},
                {"day_of_week": "TUESDAY", "is_working_day": true,
                 "start_time": "10:00", "end_time": "16:00"},
                {"day_of_week": "WEDNESDAY", "is_working_day": true},
                {"day_of_week": "THURSDAY", "is_working_day": true,
                 "start_time": "09:00", "end_time": "18:00"},
                {"day_of_week": "FRIDAY", "is_working_day": true,
                 "start_time": "09:00", "end_time": "13:00"},
                {"day_of_week": "SATURDAY", "is_working_day": false},
                {"day_of_week": "SUNDAY", "is_working_day": false}
            ]
        })))
        .mount(&mock_server)
        .await;

    let service = ScheduleSnapshotService::new(&test_config(&mock_server.uri()));
    let schedule = service.fetch_weekly_schedule().await.unwrap();

    let monday = schedule.rule_for(DayOfWeek::Monday).unwrap();
    assert_eq!(
        monday.working_window(),
        Some((
            TimeOfDay::parse("09:00").unwrap(),
            TimeOfDay::parse("18:00").unwrap()
        ))
    );
    assert_eq!(
        monday.break_window(),
        Some((
            TimeOfDay::parse("13:00").unwrap(),
            TimeOfDay::parse("14:00").unwrap()
        ))
    );

    // Working day without configured hours falls back to the defaults.
    let wednesday = schedule.rule_for(DayOfWeek::Wednesday).unwrap();
    assert_eq!(
        wednesday.working_window(),
        Some((
            TimeOfDay::parse("09:00").unwrap(),
            TimeOfDay::parse("18:00").unwrap()
        ))
    );
    assert_eq!(wednesday.break_window(), None);

    let saturday = schedule.rule_for(DayOfWeek::Saturday).unwrap();
    assert_eq!(saturday.working_window(), None);
}

#[tokio::test]
async fn rejects_malformed_times_at_the_boundary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/working-hours"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "days": [
                {"day_of_week": "MONDAY", "is_working_day": true,
                 "start_time": "9am", "end_time": "18:00"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let service = ScheduleSnapshotService::new(&test_config(&mock_server.uri()));
    let result = service.fetch_weekly_schedule().await;

    assert_matches!(result, Err(CalendarError::BackendError(_)));
}

#[tokio::test]
async fn fetches_holidays_for_the_anchored_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/holidays"))
        .and(query_param("from", "2030-01-01"))
        .and(query_param("to", "2030-03-31"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "3f1c8a6e-9d2b-4f7a-8c1d-5e6f7a8b9c0d",
                "name": "New Year",
                "holiday_date": "2030-01-01",
                "holiday_type": "public",
                "is_recurring": true,
                "created_at": "2029-12-01T00:00:00Z",
                "updated_at": "2029-12-01T00:00:00Z"
            }
        ])))
        .mount(&mock_server)
        .await;

    let service = ScheduleSnapshotService::new(&test_config(&mock_server.uri()));
    let holidays = service.fetch_holidays(date(2030, 1, 15), 2).await.unwrap();

    assert_eq!(holidays.len(), 1);
    assert!(holidays.contains(date(2030, 1, 1)));
    assert_eq!(holidays.name_for(date(2030, 1, 1)), Some("New Year"));
    assert!(!holidays.contains(date(2030, 12, 25)));
}

#[tokio::test]
async fn backend_failure_surfaces_as_backend_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/working-hours"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = ScheduleSnapshotService::new(&test_config(&mock_server.uri()));
    let result = service.fetch_weekly_schedule().await;

    assert_matches!(result, Err(CalendarError::BackendError(_)));
}

#[test]
fn holiday_window_spans_whole_months() {
    let (from, to) = holiday_window(date(2030, 1, 15), 2);
    assert_eq!(from, date(2030, 1, 1));
    assert_eq!(to, date(2030, 3, 31));

    // Window crossing a year boundary
    let (from, to) = holiday_window(date(2029, 11, 20), 2);
    assert_eq!(from, date(2029, 11, 1));
    assert_eq!(to, date(2030, 1, 31));

    // Zero trailing months covers just the anchor month
    let (from, to) = holiday_window(date(2030, 2, 10), 0);
    assert_eq!(from, date(2030, 2, 1));
    assert_eq!(to, date(2030, 2, 28));
}
