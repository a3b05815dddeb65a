//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! account registry sits behind a Tokio `RwLock` so concurrent registrations
//! serialize their uniqueness checks.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::registration::UserRegistry;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    pub users: Arc<RwLock<UserRegistry>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
