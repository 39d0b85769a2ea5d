// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{
    AppointmentError, AppointmentStatus, AvailabilityCheckRequest, AvailabilityCheckResponse,
    ConflictCheckRequest, ConflictCheckResponse, ProposedInterval, TransitionValidationRequest,
};
use crate::services::{AppointmentLifecycleService, AvailabilityReconciler, AvailabilityService};

#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<AvailabilityCheckRequest>,
) -> Result<Json<AvailabilityCheckResponse>, AppError> {
    let proposed = ProposedInterval::from_start_duration(request.start, request.duration_minutes)
        .map_err(map_appointment_error)?;

    let availability_service = AvailabilityService::new(&state);
    let windows = availability_service
        .fetch_windows(
            request.provider_id,
            request.start.date_naive(),
            request.duration_minutes,
        )
        .await
        .map_err(map_appointment_error)?;

    let reconciler = AvailabilityReconciler::new();
    let availability = reconciler.check_interval(&proposed, Some(&windows));
    let next_available = reconciler.find_next_available_slot(proposed.start, &windows);

    Ok(Json(AvailabilityCheckResponse {
        availability,
        next_available,
    }))
}

#[axum::debug_handler]
pub async fn check_conflicts(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<ConflictCheckRequest>,
) -> Result<Json<ConflictCheckResponse>, AppError> {
    let candidate = ProposedInterval::from_start_duration(request.start, request.duration_minutes)
        .map_err(map_appointment_error)?;

    let availability_service = AvailabilityService::new(&state);
    let existing = availability_service
        .fetch_provider_appointments(request.provider_id, candidate.start, candidate.end)
        .await
        .map_err(map_appointment_error)?;

    let reconciler = AvailabilityReconciler::new();
    let conflicting_appointments = reconciler.conflicting_appointments(
        &candidate,
        &existing,
        request.exclude_appointment_id,
    );

    Ok(Json(ConflictCheckResponse {
        has_conflict: !conflicting_appointments.is_empty(),
        conflicting_appointments,
    }))
}

#[axum::debug_handler]
pub async fn get_transitions(
    Path(status): Path<AppointmentStatus>,
) -> Result<Json<Value>, AppError> {
    let lifecycle = AppointmentLifecycleService::new();

    Ok(Json(json!({
        "status": status,
        "is_terminal": status.is_terminal(),
        "valid_transitions": lifecycle.valid_transitions(status),
        "available_actions": lifecycle.available_actions(status)
    })))
}

#[axum::debug_handler]
pub async fn validate_transition(
    Json(request): Json<TransitionValidationRequest>,
) -> Result<Json<Value>, AppError> {
    let lifecycle = AppointmentLifecycleService::new();

    lifecycle
        .validate_status_transition(request.current_status, request.new_status)
        .map_err(|e| AppError::Conflict(e.to_string()))?;

    Ok(Json(json!({
        "current_status": request.current_status,
        "new_status": request.new_status,
        "valid": true
    })))
}

fn map_appointment_error(error: AppointmentError) -> AppError {
    match error {
        AppointmentError::InvalidInterval(msg) => AppError::ValidationError(msg),
        AppointmentError::InvalidStatusTransition(status) => {
            AppError::Conflict(format!("Invalid status transition from {}", status))
        }
        AppointmentError::BackendError(msg) => AppError::ExternalService(msg),
    }
}
