//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is one scrolling page; `home` composes the section components in
//! display order and mounts the contact overlay once.

pub mod home;
