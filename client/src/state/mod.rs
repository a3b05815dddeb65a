//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ability`, `ui`) so the register page
//! and shell components can depend on small focused models provided as
//! `RwSignal` contexts.

pub mod ability;
pub mod auth;
pub mod ui;
