//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component logic
//! so the rules they encode can be tested natively.

pub mod clock;
pub mod contact_validation;
pub mod location;
pub mod scroll;
