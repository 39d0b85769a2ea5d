// libs/appointment-cell/src/services/reconciler.rs
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Method;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_backend::PracticeApiClient;
use shared_config::AppConfig;

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, Availability, AvailabilityResponse,
    AvailabilityWindow, ProposedInterval,
};

/// Decides whether a proposed interval is actually bookable against a
/// snapshot of open windows, and owns the overlap math so every caller
/// agrees on it. Pure and stateless; fetching the windows lives in
/// [`AvailabilityService`].
pub struct AvailabilityReconciler;

impl AvailabilityReconciler {
    pub fn new() -> Self {
        Self
    }

    /// True iff some window fully contains the proposed interval.
    /// Partial overlap does not count as available.
    pub fn is_interval_available(
        &self,
        proposed: &ProposedInterval,
        windows: &[AvailabilityWindow],
    ) -> bool {
        windows
            .iter()
            .any(|window| window.start <= proposed.start && proposed.end <= window.end)
    }

    /// Tri-state bookability. `None` windows means the data has not
    /// loaded yet and yields `Unknown`; a loaded-but-empty or
    /// non-containing list yields `Unavailable`.
    pub fn check_interval(
        &self,
        proposed: &ProposedInterval,
        windows: Option<&[AvailabilityWindow]>,
    ) -> Availability {
        match windows {
            None => Availability::Unknown,
            Some(windows) if self.is_interval_available(proposed, windows) => {
                Availability::Available
            }
            Some(_) => Availability::Unavailable,
        }
    }

    /// Start of the first window strictly after `proposed_start`.
    ///
    /// Precondition: `windows` is in chronological order as supplied by
    /// the backend; the result is undefined for unordered input.
    pub fn find_next_available_slot(
        &self,
        proposed_start: DateTime<Utc>,
        windows: &[AvailabilityWindow],
    ) -> Option<DateTime<Utc>> {
        windows
            .iter()
            .find(|window| window.start > proposed_start)
            .map(|window| window.start)
    }

    /// Existing appointments whose `[start, end)` overlaps the candidate
    /// interval, excluding the appointment being rescheduled and any
    /// already-cancelled appointment.
    pub fn conflicting_appointments(
        &self,
        candidate: &ProposedInterval,
        existing: &[Appointment],
        exclude_appointment_id: Option<Uuid>,
    ) -> Vec<Appointment> {
        let conflicts: Vec<Appointment> = existing
            .iter()
            .filter(|appointment| Some(appointment.id) != exclude_appointment_id)
            .filter(|appointment| appointment.status != AppointmentStatus::Cancelled)
            .filter(|appointment| {
                appointment.scheduled_start < candidate.end
                    && candidate.start < appointment.scheduled_end()
            })
            .cloned()
            .collect();

        if !conflicts.is_empty() {
            warn!(
                "Found {} conflicting appointments for candidate interval",
                conflicts.len()
            );
        }

        conflicts
    }
}

impl Default for AvailabilityReconciler {
    fn default() -> Self {
        Self::new()
    }
}

/// Remote reads feeding the reconciler: open windows for a
/// provider/date/duration query, and a provider's existing appointments
/// for conflict previews.
pub struct AvailabilityService {
    backend: PracticeApiClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            backend: PracticeApiClient::new(config),
        }
    }

    pub async fn fetch_windows(
        &self,
        provider_id: Uuid,
        date: NaiveDate,
        duration_minutes: i32,
    ) -> Result<Vec<AvailabilityWindow>, AppointmentError> {
        debug!(
            "Fetching availability windows for provider {} on {}",
            provider_id, date
        );

        let path = format!(
            "/api/v1/providers/{}/availability?date={}&duration_minutes={}",
            provider_id, date, duration_minutes
        );
        let response: AvailabilityResponse = self
            .backend
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| AppointmentError::BackendError(e.to_string()))?;

        Ok(response.slots)
    }

    pub async fn fetch_provider_appointments(
        &self,
        provider_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        debug!(
            "Fetching appointments for provider {} from {} to {}",
            provider_id, from, to
        );

        let path = format!(
            "/api/v1/providers/{}/appointments?from={}&to={}",
            provider_id,
            from.to_rfc3339(),
            to.to_rfc3339()
        );
        let appointments: Vec<Appointment> = self
            .backend
            .request(Method::GET, &path, None)
            .await
            .map_err(|e| AppointmentError::BackendError(e.to_string()))?;

        Ok(appointments)
    }
}
