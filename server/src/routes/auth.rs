//! Auth routes — account registration.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::response::Json;
use client::net::types::{RegisterRequest, RegisterResponse};

use crate::services::registration::RegistrationError;
use crate::state::AppState;

/// `POST /api/auth/register` — create an account.
///
/// Always answers 200: rejected registrations carry their field errors in the
/// `error` map of the body.
pub async fn register(State(state): State<AppState>, Json(req): Json<RegisterRequest>) -> Json<RegisterResponse> {
    let (result, accounts) = {
        let mut users = state.users.write().await;
        let result = users.register(&req);
        (result, users.len())
    };
    match result {
        Ok((user, access_token)) => {
            tracing::info!(user_id = user.id, username = %user.username, accounts, "account registered");
            let user = match serde_json::to_value(&user) {
                Ok(serde_json::Value::Object(map)) => map,
                other => {
                    tracing::error!(?other, "registered user did not serialize to an object");
                    serde_json::Map::new()
                }
            };
            Json(RegisterResponse { error: None, user: Some(user), access_token: Some(access_token) })
        }
        Err(e) => {
            if matches!(e, RegistrationError::Conflict(_)) {
                tracing::info!(username = %req.username, "registration conflict");
            } else {
                tracing::debug!(error = %e, "registration rejected");
            }
            Json(RegisterResponse { error: Some(e.field_errors().clone()), ..RegisterResponse::default() })
        }
    }
}
