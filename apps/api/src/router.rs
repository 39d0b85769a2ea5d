use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use calendar_cell::router::calendar_routes;
use shared_config::AppConfig;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Practice Scheduling API is running!" }))
        .nest("/api/v1/calendar", calendar_routes(state.clone()))
        .nest("/api/v1/appointments", appointment_routes(state.clone()))
}
