//! Registration form state and submit protocol.
//!
//! DESIGN
//! ======
//! The page owns a `RwSignal<RegisterForm>`; everything that decides what
//! happens on submit lives here as plain data + functions so it can be tested
//! without a browser. Side effects leave through [`RegistrationPorts`], which
//! the page implements on top of its contexts and router.
//!
//! A submit runs in three steps:
//! 1. [`RegisterForm::begin_submit`] validates and sets the in-flight flag.
//! 2. [`submit`] calls the endpoint and, on success, publishes the session.
//! 3. [`RegisterForm::settle`] folds the outcome back into the form.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use std::collections::BTreeMap;

use crate::net::api::ApiError;
use crate::net::types::{AbilityRule, RegisterRequest, RegisterResponse, ServerFieldErrors, Session};

/// Route navigated to after a successful registration.
pub const HOME_ROUTE: &str = "/";

/// Banner shown when the registration call itself fails.
pub const FAILURE_MESSAGE: &str = "Registration failed, please try again.";

// =============================================================================
// FIELDS
// =============================================================================

/// Inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    Terms,
}

impl Field {
    /// Text inputs, in display order.
    pub const TEXT: [Field; 3] = [Field::Username, Field::Email, Field::Password];

    /// Wire name, as used in messages and server error maps.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::Terms => "terms",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(Field::Username),
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "terms" => Some(Field::Terms),
            _ => None,
        }
    }
}

/// Values typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub terms: bool,
}

impl RegistrationInput {
    /// Current value of a text field. `Terms` has no text and yields `None`.
    #[must_use]
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            Field::Terms => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Username => Some(&mut self.username),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Terms => None,
        }
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error attached to one field. A `None` message only marks the field invalid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub message: Option<String>,
}

impl FieldError {
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    #[must_use]
    pub fn presence() -> Self {
        Self { message: None }
    }
}

/// Per-field errors plus server messages keyed by names the form does not have.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<Field, FieldError>,
    unmatched: Vec<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.fields.get(&field)
    }

    /// Message shown under `field`, if it has one.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).and_then(|e| e.message.as_deref())
    }

    #[must_use]
    pub fn has(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        self.fields.insert(field, error);
    }

    pub fn clear(&mut self, field: Field) {
        self.fields.remove(&field);
    }

    /// Server messages for keys that do not name a form field.
    #[must_use]
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.unmatched.is_empty()
    }

    /// Build errors from a server error map. `null` messages are skipped.
    #[must_use]
    pub fn from_server(map: &ServerFieldErrors) -> Self {
        let mut errors = Self::default();
        for (key, message) in map {
            let Some(message) = message else {
                continue;
            };
            match Field::from_name(key) {
                Some(field) => errors.set(field, FieldError::with_message(message.clone())),
                None => {
                    log::warn!("server error for unknown field {key}: {message}");
                    errors.unmatched.push(message.clone());
                }
            }
        }
        errors
    }
}

/// Check every field. Zero-length text fields and unchecked terms are errors;
/// values are not trimmed.
///
/// # Errors
///
/// Returns the errors to display when any field is invalid.
pub fn validate(input: &RegistrationInput) -> Result<RegisterRequest, FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in Field::TEXT {
        if input.text(field).is_some_and(str::is_empty) {
            errors.set(field, FieldError::with_message(format!("Please enter a valid {}", field.name())));
        }
    }
    if !input.terms {
        errors.set(Field::Terms, FieldError::presence());
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterRequest {
        username: input.username.clone(),
        email: input.email.clone(),
        password: input.password.clone(),
    })
}

// =============================================================================
// FORM STATE
// =============================================================================

/// State of the mounted registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub input: RegistrationInput,
    pub errors: FieldErrors,
    /// True while a registration request is in flight.
    pub submitting: bool,
    /// Form-level banner for failures not tied to a field.
    pub failure: Option<String>,
}

impl RegisterForm {
    /// Update a text field and drop its error.
    pub fn set_text(&mut self, field: Field, value: String) {
        if let Some(slot) = self.input.text_mut(field) {
            *slot = value;
            self.errors.clear(field);
        }
    }

    /// Update the terms checkbox and drop its error.
    pub fn set_terms(&mut self, accepted: bool) {
        self.input.terms = accepted;
        self.errors.clear(Field::Terms);
    }

    /// Start a submit attempt.
    ///
    /// Returns the request to send, or `None` when a request is already in
    /// flight or validation failed (errors are then set on the form).
    pub fn begin_submit(&mut self) -> Option<RegisterRequest> {
        if self.submitting {
            log::debug!("ignoring submit while a registration is in flight");
            return None;
        }
        self.failure = None;
        match validate(&self.input) {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Apply the outcome of the request started by [`Self::begin_submit`].
    pub fn settle(&mut self, outcome: &SubmitOutcome) {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Registered => {}
            SubmitOutcome::Rejected(errors) => {
                self.failure = errors.unmatched().first().cloned();
                self.errors = errors.clone();
            }
            SubmitOutcome::Failed(_) => self.failure = Some(FAILURE_MESSAGE.to_owned()),
        }
    }
}

// =============================================================================
// SUBMIT
// =============================================================================

/// Collaborators the registration page talks to.
pub trait RegistrationPorts {
    /// Send credentials to the registration endpoint.
    fn register(&self, request: RegisterRequest) -> impl Future<Output = Result<RegisterResponse, ApiError>>;
    /// Replace the capability rules of the current user.
    fn set_capabilities(&self, rules: Vec<AbilityRule>);
    /// Hand the new session to the auth store.
    fn set_session(&self, session: Session);
    /// Change route.
    fn navigate(&self, path: &str);
}

/// Result of one registration request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Session published and navigation triggered.
    Registered,
    /// The server reported field errors.
    Rejected(FieldErrors),
    /// The call failed or returned an unusable body.
    Failed(ApiError),
}

/// Send `request` and publish the session on success.
pub async fn submit<P: RegistrationPorts>(ports: &P, request: RegisterRequest) -> SubmitOutcome {
    let response = match ports.register(request).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("registration failed: {e}");
            return SubmitOutcome::Failed(e);
        }
    };

    if let Some(error) = &response.error {
        return SubmitOutcome::Rejected(FieldErrors::from_server(error));
    }

    let (Some(user), Some(access_token)) = (response.user, response.access_token) else {
        let e = ApiError::Decode("response has neither error nor user with accessToken".to_owned());
        log::error!("registration failed: {e}");
        return SubmitOutcome::Failed(e);
    };

    let session = Session::new(user, access_token);
    ports.set_capabilities(session.ability());
    ports.set_session(session);
    ports.navigate(HOME_ROUTE);
    SubmitOutcome::Registered
}
