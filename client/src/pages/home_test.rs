use super::*;
use crate::net::types::AbilityRule;

fn rule(action: &str, subject: &str) -> AbilityRule {
    AbilityRule { action: action.to_owned(), subject: subject.to_owned() }
}

#[test]
fn no_rules_hides_sign_out() {
    assert!(!can_sign_out(&AbilityState::default()));
}

#[test]
fn default_registration_rules_allow_sign_out() {
    let ability = AbilityState { rules: vec![rule("read", "ACL"), rule("read", "Auth")] };
    assert!(can_sign_out(&ability));
}

#[test]
fn wildcard_rule_allows_sign_out() {
    let ability = AbilityState { rules: vec![rule("manage", "all")] };
    assert!(can_sign_out(&ability));
}
