//! Contact submission collaborator.
//!
//! The contact overlay hands a validated [`ContactPayload`] to a
//! [`ContactSubmitter`] and waits for the outcome. The site ships only
//! [`SimulatedSubmitter`], which waits a fixed delay and reports success; a
//! real endpoint slots in behind the same trait.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`SubmitError`] values; the overlay shows them as the
//! `error` status and keeps the form contents for a manual retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde::Serialize;

use crate::util::contact_validation::ContactFields;

/// Fixed delay of the simulated submission, in milliseconds.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2000;

/// Trimmed contact message ready to hand to a submission service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Build a payload from form input, trimming every field.
    #[must_use]
    pub fn from_fields(fields: &ContactFields) -> Self {
        Self {
            name: fields.name.trim().to_owned(),
            email: fields.email.trim().to_owned(),
            subject: fields.subject.trim().to_owned(),
            message: fields.message.trim().to_owned(),
        }
    }
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The submission service refused the message.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Anything that can deliver a contact message.
pub trait ContactSubmitter {
    /// Deliver `payload`, resolving once the outcome is known.
    fn submit(&self, payload: &ContactPayload) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Stand-in submitter: waits `delay_ms` and always succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self { delay_ms: SIMULATED_SUBMIT_DELAY_MS }
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        log::debug!("simulating contact submission from {} ({} chars)", payload.email, payload.message.len());
        crate::util::clock::sleep_ms(self.delay_ms).await;
        Ok(())
    }
}
