use super::*;

#[test]
fn ui_state_defaults_to_light_skin() {
    assert_eq!(UiState::default().skin, Skin::Light);
}

#[test]
fn skin_names_parse_back() {
    for skin in [Skin::Light, Skin::Dark] {
        assert_eq!(Skin::parse(skin.as_str()), Some(skin));
    }
    assert_eq!(Skin::parse("bordered"), None);
    assert_eq!(Skin::parse("Dark"), None);
}

#[test]
fn toggled_flips_between_the_two_skins() {
    assert_eq!(Skin::Light.toggled(), Skin::Dark);
    assert_eq!(Skin::Dark.toggled(), Skin::Light);
}
