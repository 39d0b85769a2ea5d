// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, warn};

use crate::models::{AppointmentAction, AppointmentError, AppointmentStatus};

/// Guard over the appointment status graph. The backend enforces the
/// real transitions; this mirror exists so the UI never offers an
/// action the backend would reject.
pub struct AppointmentLifecycleService;

impl AppointmentLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// Validate that a status transition is allowed.
    pub fn validate_status_transition(
        &self,
        current_status: AppointmentStatus,
        new_status: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!(
            "Validating status transition from {} to {}",
            current_status, new_status
        );

        if !self.valid_transitions(current_status).contains(&new_status) {
            warn!(
                "Invalid status transition attempted: {} -> {}",
                current_status, new_status
            );
            return Err(AppointmentError::InvalidStatusTransition(current_status));
        }

        Ok(())
    }

    /// All valid next statuses for a given current status. Cancellation
    /// and no-show are side-exits from every non-terminal state;
    /// terminal states have no outgoing transitions.
    pub fn valid_transitions(&self, current_status: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current_status {
            AppointmentStatus::Scheduled => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::InProgress,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::InProgress => vec![
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::Completed
            | AppointmentStatus::Cancelled
            | AppointmentStatus::NoShow => vec![],
        }
    }

    /// Actions a UI may offer for an appointment in the given status:
    /// confirm only from scheduled, start only from confirmed, complete
    /// only from in-progress, nothing from a terminal state.
    pub fn available_actions(&self, current_status: AppointmentStatus) -> Vec<AppointmentAction> {
        self.valid_transitions(current_status)
            .into_iter()
            .filter_map(|status| match status {
                AppointmentStatus::Confirmed => Some(AppointmentAction::Confirm),
                AppointmentStatus::InProgress => Some(AppointmentAction::Start),
                AppointmentStatus::Completed => Some(AppointmentAction::Complete),
                AppointmentStatus::Cancelled => Some(AppointmentAction::Cancel),
                AppointmentStatus::NoShow => Some(AppointmentAction::MarkNoShow),
                // Scheduled is the entry state, never a transition target.
                AppointmentStatus::Scheduled => None,
            })
            .collect()
    }
}

impl Default for AppointmentLifecycleService {
    fn default() -> Self {
        Self::new()
    }
}
