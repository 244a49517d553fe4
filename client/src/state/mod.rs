//! Client state modules.

pub mod contact;
