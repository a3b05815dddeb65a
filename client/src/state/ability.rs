//! Capability rules for the authenticated user.
//!
//! Rules are `(action, subject)` pairs; `manage` matches any action and `all`
//! matches any subject.

#[cfg(test)]
#[path = "ability_test.rs"]
mod ability_test;

use crate::net::types::AbilityRule;

const ANY_ACTION: &str = "manage";
const ANY_SUBJECT: &str = "all";

/// Current ability set, replaced wholesale on each update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityState {
    pub rules: Vec<AbilityRule>,
}

impl AbilityState {
    /// Replace the rule set.
    pub fn update(&mut self, rules: Vec<AbilityRule>) {
        log::debug!("ability updated: {} rule(s)", rules.len());
        self.rules = rules;
    }

    /// Whether any rule grants `action` on `subject`.
    #[must_use]
    pub fn can(&self, action: &str, subject: &str) -> bool {
        self.rules.iter().any(|rule| {
            (rule.action == action || rule.action == ANY_ACTION)
                && (rule.subject == subject || rule.subject == ANY_SUBJECT)
        })
    }
}
