use super::*;

fn request(username: &str, email: &str, password: &str) -> RegisterRequest {
    RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() }
}

// =============================================================================
// register — success
// =============================================================================

#[test]
fn register_creates_account_with_default_ability() {
    let mut registry = UserRegistry::new();
    let (user, token) = registry.register(&request("johndoe", "john@example.com", "secret")).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.username, "johndoe");
    assert_eq!(user.email, "john@example.com");
    assert_eq!(user.role, "client");
    assert_eq!(user.ability, default_ability());
    assert_eq!(token.len(), 64);
    assert_eq!(registry.len(), 1);
}

#[test]
fn registered_user_serializes_camel_case() {
    let mut registry = UserRegistry::new();
    let (user, _) = registry.register(&request("johndoe", "john@example.com", "secret")).unwrap();
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["fullName"], "johndoe");
    assert!(value["avatar"].is_null());
    assert_eq!(value["ability"][0]["subject"], "ACL");
}

#[test]
fn ids_increase_with_each_account() {
    let mut registry = UserRegistry::new();
    let (a, _) = registry.register(&request("a", "a@example.com", "p")).unwrap();
    let (b, _) = registry.register(&request("b", "b@example.com", "p")).unwrap();
    assert_eq!((a.id, b.id), (1, 2));
}

// =============================================================================
// register — rejections
// =============================================================================

#[test]
fn empty_fields_are_reported_per_field() {
    let mut registry = UserRegistry::new();
    let err = registry.register(&request("", "john@example.com", "")).unwrap_err();

    assert!(matches!(err, RegistrationError::Invalid(_)));
    let errors = err.field_errors();
    assert_eq!(errors.get("username"), Some(&Some("Please enter a valid username".to_owned())));
    assert_eq!(errors.get("password"), Some(&Some("Please enter a valid password".to_owned())));
    assert!(!errors.contains_key("email"));
    assert_eq!(registry.len(), 0);
}

#[test]
fn duplicate_email_is_a_conflict_case_insensitively() {
    let mut registry = UserRegistry::new();
    registry.register(&request("johndoe", "john@example.com", "secret")).unwrap();
    let err = registry.register(&request("jane", "JOHN@example.com", "secret")).unwrap_err();

    assert!(matches!(err, RegistrationError::Conflict(_)));
    let errors = err.field_errors();
    assert_eq!(errors.get("email"), Some(&Some("This email is already in use.".to_owned())));
    assert_eq!(errors.get("username"), Some(&None));
    assert_eq!(registry.len(), 1);
}

#[test]
fn duplicate_username_is_a_conflict() {
    let mut registry = UserRegistry::new();
    registry.register(&request("johndoe", "john@example.com", "secret")).unwrap();
    let err = registry.register(&request("JohnDoe", "other@example.com", "secret")).unwrap_err();

    let errors = err.field_errors();
    assert_eq!(errors.get("username"), Some(&Some("This username is already in use.".to_owned())));
    assert_eq!(errors.get("email"), Some(&None));
}

// =============================================================================
// helpers
// =============================================================================

#[test]
fn hash_password_is_stable_hex() {
    let a = hash_password("secret");
    assert_eq!(a, hash_password("secret"));
    assert_ne!(a, hash_password("secret2"));
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn access_tokens_are_unique() {
    assert_ne!(generate_access_token(), generate_access_token());
}

#[test]
fn password_is_stored_only_as_its_digest() {
    let mut registry = UserRegistry::new();
    let (user, _) = registry.register(&request("johndoe", "john@example.com", "secret")).unwrap();

    let account = &registry.accounts[0];
    assert_eq!(account.password_hash, hash_password("secret"));
    assert_ne!(account.password_hash, "secret");
    assert!(!serde_json::to_string(&user).unwrap().contains("secret"));
}
