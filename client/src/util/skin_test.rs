#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_is_light_without_browser() {
    assert_eq!(read_preference(), Skin::Light);
}

#[test]
fn toggle_returns_the_other_skin() {
    assert_eq!(toggle(Skin::Light), Skin::Dark);
    assert_eq!(toggle(Skin::Dark), Skin::Light);
}
