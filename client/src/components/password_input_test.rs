use super::*;

#[test]
fn hidden_password_uses_password_type() {
    assert_eq!(input_type(false), "password");
}

#[test]
fn visible_password_uses_text_type() {
    assert_eq!(input_type(true), "text");
}
