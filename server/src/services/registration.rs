//! In-memory account registry behind the development register endpoint.
//!
//! Accounts live for the lifetime of the process. Usernames and emails are
//! unique case-insensitively; passwords are kept only as SHA-256 digests.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::fmt::Write;

use client::net::types::{AbilityRule, RegisterRequest, ServerFieldErrors};
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};

const DEFAULT_ROLE: &str = "client";
const USERNAME_TAKEN: &str = "This username is already in use.";
const EMAIL_TAKEN: &str = "This email is already in use.";

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("missing required fields")]
    Invalid(ServerFieldErrors),
    #[error("username or email already registered")]
    Conflict(ServerFieldErrors),
}

impl RegistrationError {
    /// Field-name to message map reported to the client.
    #[must_use]
    pub fn field_errors(&self) -> &ServerFieldErrors {
        match self {
            Self::Invalid(errors) | Self::Conflict(errors) => errors,
        }
    }
}

/// Public view of a registered account, as returned to the client.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: u64,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub avatar: Option<String>,
    pub ability: Vec<AbilityRule>,
}

struct Account {
    user: RegisteredUser,
    /// SHA-256 hex digest of the password. Never returned to clients.
    #[allow(dead_code)]
    password_hash: String,
}

/// Registered accounts, keyed by insertion order.
#[derive(Default)]
pub struct UserRegistry {
    accounts: Vec<Account>,
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a random 32-byte hex access token.
#[must_use]
pub fn generate_access_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[must_use]
pub fn hash_password(password: &str) -> String {
    bytes_to_hex(&Sha256::digest(password.as_bytes()))
}

/// Abilities granted to self-registered accounts.
#[must_use]
pub fn default_ability() -> Vec<AbilityRule> {
    [("read", "ACL"), ("read", "Auth")]
        .into_iter()
        .map(|(action, subject)| AbilityRule { action: action.to_owned(), subject: subject.to_owned() })
        .collect()
}

fn missing_fields(req: &RegisterRequest) -> ServerFieldErrors {
    [("username", &req.username), ("email", &req.email), ("password", &req.password)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| (field.to_owned(), Some(format!("Please enter a valid {field}"))))
        .collect()
}

impl UserRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    fn username_taken(&self, username: &str) -> bool {
        self.accounts.iter().any(|a| a.user.username.eq_ignore_ascii_case(username))
    }

    fn email_taken(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.user.email.eq_ignore_ascii_case(email))
    }

    /// Create an account and return it with a fresh access token.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::Invalid`] for empty fields and
    /// [`RegistrationError::Conflict`] when the username or email is taken.
    /// Both carry an entry for every checked field, `None` when it passed.
    pub fn register(&mut self, req: &RegisterRequest) -> Result<(RegisteredUser, String), RegistrationError> {
        let missing = missing_fields(req);
        if !missing.is_empty() {
            return Err(RegistrationError::Invalid(missing));
        }

        let username_taken = self.username_taken(&req.username);
        let email_taken = self.email_taken(&req.email);
        if username_taken || email_taken {
            let errors = ServerFieldErrors::from([
                ("username".to_owned(), username_taken.then(|| USERNAME_TAKEN.to_owned())),
                ("email".to_owned(), email_taken.then(|| EMAIL_TAKEN.to_owned())),
            ]);
            return Err(RegistrationError::Conflict(errors));
        }

        let user = RegisteredUser {
            id: self.accounts.len() as u64 + 1,
            full_name: req.username.clone(),
            username: req.username.clone(),
            email: req.email.clone(),
            role: DEFAULT_ROLE.to_owned(),
            avatar: None,
            ability: default_ability(),
        };
        self.accounts.push(Account { user: user.clone(), password_hash: hash_password(&req.password) });
        Ok((user, generate_access_token()))
    }
}
