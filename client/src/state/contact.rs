//! Contact overlay state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Held in an `RwSignal<ContactFormState>` owned by the contact overlay
//! component, which renders from it and drives transitions. The async
//! submission and the post-success reset timer report back through
//! [`SubmitTicket`]s.
//!
//! DESIGN
//! ======
//! Every close bumps `epoch`. A ticket captures the epoch at the moment a
//! submission started, so a submission or reset timer that outlives the
//! overlay it belonged to is recognised as stale and dropped instead of
//! mutating a freshly reopened form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::submit::{ContactPayload, SubmitError};
use crate::util::contact_validation::{ContactField, ContactFields, FieldErrors, validate};

/// Delay between a successful submission and the automatic close, in milliseconds.
pub const SUCCESS_RESET_DELAY_MS: u32 = 2000;

/// Where the current submission attempt stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(SubmitError),
}

/// Proof that a transition belongs to the overlay session that started it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub epoch: u64,
    pub payload: ContactPayload,
}

/// Contact overlay visibility, form contents, and submission progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub open: bool,
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
    pub epoch: u64,
}

impl ContactFormState {
    /// Show the overlay. Reopening an already open overlay changes nothing.
    pub fn open(&mut self) {
        if !self.open {
            log::debug!("contact overlay opened");
        }
        self.open = true;
    }

    /// Record typed input and drop the error attached to that field only.
    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.fields.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and, if acceptable, enter `Submitting`.
    ///
    /// Returns `None` when a submission is already in flight or when the
    /// form has errors (which are stored for display).
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.status == SubmitStatus::Submitting {
            return None;
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            log::debug!("contact form rejected with {} field error(s)", errors.len());
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::default();
        self.status = SubmitStatus::Submitting;
        Some(SubmitTicket { epoch: self.epoch, payload: ContactPayload::from_fields(&self.fields) })
    }

    /// Apply a submission outcome. Returns `false` if the ticket is stale.
    pub fn finish_submit(&mut self, ticket: &SubmitTicket, outcome: Result<(), SubmitError>) -> bool {
        if !self.accepts(ticket) || self.status != SubmitStatus::Submitting {
            log::debug!("dropping stale contact submission outcome (epoch {})", ticket.epoch);
            return false;
        }

        match outcome {
            Ok(()) => {
                log::info!("contact submission succeeded");
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                log::warn!("contact submission failed: {err}");
                self.status = SubmitStatus::Error(err);
            }
        }
        true
    }

    /// Clear and close after the success message has been shown.
    /// Returns `false` if the overlay was already closed or reopened since.
    pub fn complete_reset(&mut self, ticket: &SubmitTicket) -> bool {
        if !self.accepts(ticket) || self.status != SubmitStatus::Success {
            return false;
        }
        self.close();
        true
    }

    /// Hide the overlay and discard contents, errors, and status.
    pub fn close(&mut self) {
        if self.open {
            log::debug!("contact overlay closed");
        }
        let epoch = self.epoch.wrapping_add(1);
        *self = Self { epoch, ..Self::default() };
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    #[must_use]
    pub fn error_for(&self, field: ContactField) -> Option<String> {
        self.errors.get(field).map(|err| err.to_string())
    }

    fn accepts(&self, ticket: &SubmitTicket) -> bool {
        self.open && ticket.epoch == self.epoch
    }
}
