//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the wire schema shared with
//! the registration endpoint.

pub mod api;
pub mod types;
