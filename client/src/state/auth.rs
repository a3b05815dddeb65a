//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the register page after a successful registration and read by
//! identity-aware routes. The session survives reloads through `localStorage`
//! under the `userData` and `accessToken` keys.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::{Map, Value};

use crate::net::types::Session;
use crate::util::storage;

const USER_DATA_KEY: &str = "userData";
const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Authentication state tracking the current session and loading status.
///
/// `loading` stays true until the stored session has been restored in the
/// browser, so routes do not act on an anonymous state prematurely.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    /// Store a freshly issued session and persist it.
    pub fn login(&mut self, session: Session) {
        storage::save_json(USER_DATA_KEY, &session.user);
        storage::save_json(ACCESS_TOKEN_KEY, &session.access_token);
        log::info!("session established for {}", session.display_name().unwrap_or("user"));
        self.session = Some(session);
        self.loading = false;
    }

    /// Drop the session and its persisted copy.
    pub fn logout(&mut self) {
        storage::remove(USER_DATA_KEY);
        storage::remove(ACCESS_TOKEN_KEY);
        self.session = None;
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Rebuild the session persisted by [`AuthState::login`], if any.
#[must_use]
pub fn restore() -> Option<Session> {
    let user = storage::load_json::<Map<String, Value>>(USER_DATA_KEY)?;
    let token = storage::load_json::<String>(ACCESS_TOKEN_KEY)?;
    Some(Session::new(user, token))
}
