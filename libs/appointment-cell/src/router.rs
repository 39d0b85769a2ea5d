use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/availability/check", post(handlers::check_availability))
        .route("/conflicts/check", post(handlers::check_conflicts))
        .route("/transitions/{status}", get(handlers::get_transitions))
        .route("/transitions/validate", post(handlers::validate_transition))
        .with_state(state)
}
