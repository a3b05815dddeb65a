//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and input widgets while reading/writing
//! shared state from Leptos context providers.

pub mod password_input;
pub mod theme_toggle;
