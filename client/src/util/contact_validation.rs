//! Contact form fields and their validation rules.
//!
//! Every field is checked independently, so one submit attempt reports all
//! problems at once. The error map is keyed by [`ContactField`], which keeps
//! its keys a subset of the form's fields by construction.

#[cfg(test)]
#[path = "contact_validation_test.rs"]
mod contact_validation_test;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Minimum trimmed message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

/// One of the four contact form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];
}

/// Raw form input as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Why a field was rejected. `Display` is the inline message shown to the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// Per-field validation errors. Empty means the form is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn contains(&self, field: ContactField) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Drop the error for one field, leaving the others untouched.
    pub fn clear(&mut self, field: ContactField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    fn insert(&mut self, field: ContactField, error: FieldError) {
        self.0.insert(field, error);
    }
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> Option<&'static Regex> {
    EMAIL_REGEX
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(err) => {
                log::warn!("email pattern failed to compile: {err}");
                None
            }
        })
        .as_ref()
}

/// Whether `email` looks like `local@domain.tld` with no whitespace and a single `@`.
///
/// The value is matched as typed; surrounding whitespace makes it invalid.
/// If the pattern cannot be built every address is treated as invalid.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

/// Check all four fields and collect every failure.
#[must_use]
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.insert(ContactField::Name, FieldError::NameRequired);
    }

    if fields.email.trim().is_empty() {
        errors.insert(ContactField::Email, FieldError::EmailRequired);
    } else if !is_valid_email(&fields.email) {
        errors.insert(ContactField::Email, FieldError::EmailInvalid);
    }

    if fields.subject.trim().is_empty() {
        errors.insert(ContactField::Subject, FieldError::SubjectRequired);
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.insert(ContactField::Message, FieldError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.insert(ContactField::Message, FieldError::MessageTooShort);
    }

    errors
}
