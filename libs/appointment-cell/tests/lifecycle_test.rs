// libs/appointment-cell/tests/lifecycle_test.rs
use assert_matches::assert_matches;

use appointment_cell::models::{AppointmentAction, AppointmentError, AppointmentStatus};
use appointment_cell::services::AppointmentLifecycleService;

use AppointmentStatus::*;

#[test]
fn happy_path_transitions_are_allowed() {
    let service = AppointmentLifecycleService::new();

    assert!(service.validate_status_transition(Scheduled, Confirmed).is_ok());
    assert!(service.validate_status_transition(Confirmed, InProgress).is_ok());
    assert!(service.validate_status_transition(InProgress, Completed).is_ok());
}

#[test]
fn stage_skipping_is_rejected() {
    let service = AppointmentLifecycleService::new();

    for (from, to) in [
        (Scheduled, InProgress),
        (Scheduled, Completed),
        (Confirmed, Completed),
        (InProgress, Confirmed),
        (Confirmed, Scheduled),
    ] {
        assert_matches!(
            service.validate_status_transition(from, to),
            Err(AppointmentError::InvalidStatusTransition(status)) if status == from,
            "{} -> {} should be rejected",
            from,
            to
        );
    }
}

#[test]
fn cancellation_and_no_show_exit_every_non_terminal_state() {
    let service = AppointmentLifecycleService::new();

    for from in [Scheduled, Confirmed, InProgress] {
        assert!(service.validate_status_transition(from, Cancelled).is_ok());
        assert!(service.validate_status_transition(from, NoShow).is_ok());
    }
}

#[test]
fn terminal_states_have_no_outgoing_transitions() {
    let service = AppointmentLifecycleService::new();

    for terminal in [Completed, Cancelled, NoShow] {
        assert!(terminal.is_terminal());
        assert!(service.valid_transitions(terminal).is_empty());
        assert!(service.available_actions(terminal).is_empty());

        for to in [Scheduled, Confirmed, InProgress, Completed, Cancelled, NoShow] {
            assert_matches!(
                service.validate_status_transition(terminal, to),
                Err(AppointmentError::InvalidStatusTransition(_))
            );
        }
    }
}

#[test]
fn self_transitions_are_rejected() {
    let service = AppointmentLifecycleService::new();

    for status in [Scheduled, Confirmed, InProgress, Completed, Cancelled, NoShow] {
        assert_matches!(
            service.validate_status_transition(status, status),
            Err(AppointmentError::InvalidStatusTransition(_))
        );
    }
}

#[test]
fn valid_transition_lists_match_the_status_graph() {
    let service = AppointmentLifecycleService::new();

    assert_eq!(
        service.valid_transitions(Scheduled),
        vec![Confirmed, Cancelled, NoShow]
    );
    assert_eq!(
        service.valid_transitions(Confirmed),
        vec![InProgress, Cancelled, NoShow]
    );
    assert_eq!(
        service.valid_transitions(InProgress),
        vec![Completed, Cancelled, NoShow]
    );
}

#[test]
fn available_actions_follow_the_transitions() {
    let service = AppointmentLifecycleService::new();

    assert_eq!(
        service.available_actions(Scheduled),
        vec![
            AppointmentAction::Confirm,
            AppointmentAction::Cancel,
            AppointmentAction::MarkNoShow
        ]
    );
    assert_eq!(
        service.available_actions(Confirmed),
        vec![
            AppointmentAction::Start,
            AppointmentAction::Cancel,
            AppointmentAction::MarkNoShow
        ]
    );
    assert_eq!(
        service.available_actions(InProgress),
        vec![
            AppointmentAction::Complete,
            AppointmentAction::Cancel,
            AppointmentAction::MarkNoShow
        ]
    );
}
