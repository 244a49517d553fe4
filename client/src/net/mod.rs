//! Outbound collaborators.
//!
//! `submit` defines how a contact message leaves the page.

pub mod submit;
