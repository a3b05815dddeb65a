//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates reusable widgets to
//! `components`. Logic that must be testable off the browser sits in plain
//! modules beside the page (`register_form`).

pub mod home;
pub mod login;
pub mod register;
pub mod register_form;
