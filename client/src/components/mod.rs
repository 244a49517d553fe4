//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page section is a component reading the static content store. Overlay
//! and section state is kept in component-local signals.

pub mod contact_modal;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod hero_canvas;
pub mod project_modal;
pub mod projects;
pub mod skills;
pub mod stats;
