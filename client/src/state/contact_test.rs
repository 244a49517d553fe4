use super::*;
use crate::util::contact_validation::FieldError;

fn filled_open_form() -> ContactFormState {
    let mut state = ContactFormState::default();
    state.open();
    state.set_field(ContactField::Name, "Ada Lovelace".to_owned());
    state.set_field(ContactField::Email, "ada@example.com".to_owned());
    state.set_field(ContactField::Subject, "Hello".to_owned());
    state.set_field(ContactField::Message, "I'd like to talk about a project.".to_owned());
    state
}

// =============================================================
// Defaults and visibility
// =============================================================

#[test]
fn default_state_is_closed_and_idle() {
    let state = ContactFormState::default();
    assert!(!state.open);
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.fields, ContactFields::default());
    assert!(state.errors.is_empty());
    assert_eq!(state.epoch, 0);
    assert!(!state.submit_disabled());
}

#[test]
fn open_is_idempotent() {
    let mut state = filled_open_form();
    let before = state.clone();
    state.open();
    assert_eq!(state, before);
}

#[test]
fn close_resets_everything_and_advances_epoch() {
    let mut state = filled_open_form();
    assert!(state.begin_submit().is_some());
    state.close();
    assert!(!state.open);
    assert_eq!(state.fields, ContactFields::default());
    assert!(state.errors.is_empty());
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.epoch, 1);
}

#[test]
fn close_from_error_state_clears_errors() {
    let mut state = ContactFormState::default();
    state.open();
    assert!(state.begin_submit().is_none());
    assert_eq!(state.errors.len(), 4);
    state.close();
    assert!(state.errors.is_empty());
}

// =============================================================
// Field editing
// =============================================================

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut state = ContactFormState::default();
    state.open();
    assert!(state.begin_submit().is_none());

    state.set_field(ContactField::Email, "x".to_owned());
    assert!(!state.errors.contains(ContactField::Email));
    assert_eq!(state.error_for(ContactField::Name).as_deref(), Some("Name is required"));
    assert!(state.errors.contains(ContactField::Subject));
    assert!(state.errors.contains(ContactField::Message));
}

// =============================================================
// Submission flow
// =============================================================

#[test]
fn invalid_submit_stores_errors_and_keeps_status() {
    let mut state = filled_open_form();
    state.set_field(ContactField::Message, "too short".to_owned());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.errors.get(ContactField::Message), Some(FieldError::MessageTooShort));
}

#[test]
fn valid_submit_enters_submitting_with_trimmed_payload() {
    let mut state = filled_open_form();
    state.set_field(ContactField::Name, "  Ada  ".to_owned());
    let ticket = state.begin_submit();
    assert_eq!(state.status, SubmitStatus::Submitting);
    assert!(state.submit_disabled());
    let ticket = ticket.as_ref().map(|t| (t.epoch, t.payload.name.as_str()));
    assert_eq!(ticket, Some((0, "Ada")));
}

#[test]
fn second_submit_while_submitting_is_ignored() {
    let mut state = filled_open_form();
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.status, SubmitStatus::Submitting);
}

#[test]
fn full_success_cycle_closes_and_clears() {
    let mut state = filled_open_form();
    let Some(ticket) = state.begin_submit() else {
        panic!("valid form should start submitting");
    };
    assert!(state.finish_submit(&ticket, Ok(())));
    assert_eq!(state.status, SubmitStatus::Success);
    assert!(!state.submit_disabled());

    assert!(state.complete_reset(&ticket));
    assert!(!state.open);
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.fields, ContactFields::default());
}

#[test]
fn failure_keeps_contents_and_allows_retry() {
    let mut state = filled_open_form();
    let Some(ticket) = state.begin_submit() else {
        panic!("valid form should start submitting");
    };
    let fields = state.fields.clone();
    assert!(state.finish_submit(&ticket, Err(SubmitError::Rejected("offline".to_owned()))));
    assert_eq!(state.status, SubmitStatus::Error(SubmitError::Rejected("offline".to_owned())));
    assert_eq!(state.fields, fields);
    assert!(!state.submit_disabled());

    assert!(state.begin_submit().is_some());
    assert_eq!(state.status, SubmitStatus::Submitting);
}

#[test]
fn reset_does_nothing_after_failure() {
    let mut state = filled_open_form();
    let Some(ticket) = state.begin_submit() else {
        panic!("valid form should start submitting");
    };
    state.finish_submit(&ticket, Err(SubmitError::Rejected("bounced".to_owned())));
    assert!(!state.complete_reset(&ticket));
    assert!(state.open);
}

// =============================================================
// Stale transitions
// =============================================================

#[test]
fn outcome_after_close_is_dropped() {
    let mut state = filled_open_form();
    let Some(ticket) = state.begin_submit() else {
        panic!("valid form should start submitting");
    };
    state.close();
    assert!(!state.finish_submit(&ticket, Ok(())));
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn outcome_after_close_and_reopen_is_dropped() {
    let mut state = filled_open_form();
    let Some(ticket) = state.begin_submit() else {
        panic!("valid form should start submitting");
    };
    state.close();
    state.open();
    state.set_field(ContactField::Name, "Grace".to_owned());

    assert!(!state.finish_submit(&ticket, Ok(())));
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.fields.name, "Grace");
}

#[test]
fn reset_timer_after_reopen_is_dropped() {
    let mut state = filled_open_form();
    let Some(ticket) = state.begin_submit() else {
        panic!("valid form should start submitting");
    };
    state.finish_submit(&ticket, Ok(()));
    state.close();
    state.open();
    state.set_field(ContactField::Subject, "Another".to_owned());

    assert!(!state.complete_reset(&ticket));
    assert!(state.open);
    assert_eq!(state.fields.subject, "Another");
}
