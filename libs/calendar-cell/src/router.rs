use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn calendar_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/schedule", get(handlers::get_weekly_schedule))
        .route("/holidays", get(handlers::list_holidays))
        .route("/days/{date}/status", get(handlers::get_date_status))
        .route("/days/{date}/slots", get(handlers::get_day_slots))
        .with_state(state)
}
