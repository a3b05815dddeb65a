use super::*;

use serde_json::json;

fn session() -> Session {
    let user = json!({ "id": 1, "username": "johndoe" }).as_object().cloned().unwrap();
    Session::new(user, "tok".to_owned())
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_stores_session_and_finishes_loading() {
    let mut state = AuthState::default();
    state.login(session());
    assert!(state.is_authenticated());
    assert!(!state.loading);
    assert_eq!(state.session.unwrap().access_token, "tok");
}

#[test]
fn logout_clears_session() {
    let mut state = AuthState::default();
    state.login(session());
    state.logout();
    assert!(state.session.is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn restore_is_none_without_browser_storage() {
    assert!(restore().is_none());
}
