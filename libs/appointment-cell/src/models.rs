// libs/appointment-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==============================================================================
// APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub provider_id: Uuid,
    pub scheduled_start: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Scheduled end, exclusive: the appointment occupies
    /// `[scheduled_start, scheduled_end)`.
    pub fn scheduled_end(&self) -> DateTime<Utc> {
        self.scheduled_start + chrono::Duration::minutes(self.duration_minutes as i64)
    }
}

/// Mirror of the backend's appointment lifecycle. The backend is
/// authoritative; this copy only guards which actions the UI may offer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::InProgress => write!(f, "in_progress"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// Transition actions the UI may surface for an appointment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentAction {
    Confirm,
    Start,
    Complete,
    Cancel,
    MarkNoShow,
}

// ==============================================================================
// AVAILABILITY MODELS
// ==============================================================================

/// One contiguous bookable interval computed by the backend for a
/// provider/date/duration query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Wire shape of the availability endpoint. The canonical field name is
/// `slots`; older backend builds emit `available_slots`, accepted on
/// input only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    #[serde(alias = "available_slots")]
    pub slots: Vec<AvailabilityWindow>,
}

/// A user-chosen start + duration, built per evaluation and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposedInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ProposedInterval {
    pub fn from_start_duration(
        start: DateTime<Utc>,
        duration_minutes: i32,
    ) -> Result<Self, AppointmentError> {
        if duration_minutes <= 0 {
            return Err(AppointmentError::InvalidInterval(format!(
                "duration must be positive, got {} minutes",
                duration_minutes
            )));
        }
        Ok(Self {
            start,
            end: start + chrono::Duration::minutes(duration_minutes as i64),
        })
    }
}

/// Bookability of a proposed interval. `Unknown` means the window data
/// has not loaded yet and must never be conflated with `Unavailable`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Unknown,
    Available,
    Unavailable,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityCheckRequest {
    pub provider_id: Uuid,
    pub start: DateTime<Utc>,
    pub duration_minutes: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityCheckResponse {
    pub availability: Availability,
    pub next_available: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConflictCheckRequest {
    pub provider_id: Uuid,
    pub start: DateTime<Utc>,
    pub duration_minutes: i32,
    pub exclude_appointment_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConflictCheckResponse {
    pub has_conflict: bool,
    pub conflicting_appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransitionValidationRequest {
    pub current_status: AppointmentStatus,
    pub new_status: AppointmentStatus,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid status transition from {0}")]
    InvalidStatusTransition(AppointmentStatus),

    #[error("Backend error: {0}")]
    BackendError(String),
}
