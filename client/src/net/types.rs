//! Wire DTOs for the registration endpoint and the session payload.
//!
//! DESIGN
//! ======
//! The user object returned by the server is opaque to this crate: it is kept
//! as a JSON map and only read for `ability` and display fields, so server-side
//! additions pass through to the auth store untouched.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Credentials posted to the registration endpoint. `terms` is never sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Field-name to message mapping returned on rejected registrations.
/// A `null` message means the field has no error.
pub type ServerFieldErrors = BTreeMap<String, Option<String>>;

/// Body returned by `POST /api/auth/register`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Present when the server rejected the registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ServerFieldErrors>,
    /// Newly created user, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Map<String, Value>>,
    /// Access token issued for the new user, present on success.
    #[serde(default, rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

/// One permission rule of the authenticated user's ability set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRule {
    pub action: String,
    pub subject: String,
}

/// Session payload handed to the auth store: `{ ...user, accessToken }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub user: Map<String, Value>,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl Session {
    /// Merge a user object with its access token. A stale `accessToken` key in
    /// the user object is replaced by `access_token`.
    #[must_use]
    pub fn new(mut user: Map<String, Value>, access_token: String) -> Self {
        user.remove("accessToken");
        Self { user, access_token }
    }

    /// Ability rules carried in the user's `ability` field.
    ///
    /// Missing or malformed values yield an empty rule set.
    #[must_use]
    pub fn ability(&self) -> Vec<AbilityRule> {
        ability_from_user(&self.user)
    }

    /// Name to greet the user with: `fullName`, then `username`, then `email`.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        ["fullName", "username", "email"]
            .iter()
            .find_map(|key| self.user.get(*key).and_then(Value::as_str).filter(|name| !name.is_empty()))
    }
}

/// Read the `ability` rules from a user object.
#[must_use]
pub fn ability_from_user(user: &Map<String, Value>) -> Vec<AbilityRule> {
    let Some(raw) = user.get("ability") else {
        log::warn!("user object has no ability field");
        return Vec::new();
    };
    match serde_json::from_value::<Vec<AbilityRule>>(raw.clone()) {
        Ok(rules) => rules,
        Err(e) => {
            log::warn!("ignoring malformed ability field: {e}");
            Vec::new()
        }
    }
}
