use super::*;

#[test]
fn light_skin_uses_light_illustration() {
    assert_eq!(illustration_src(Skin::Light), "/images/pages/register-v2.svg");
}

#[test]
fn dark_skin_uses_dark_illustration() {
    assert_eq!(illustration_src(Skin::Dark), "/images/pages/register-v2-dark.svg");
}

#[test]
fn toggling_skin_changes_only_the_illustration_asset() {
    let mut ui = UiState::default();
    let light = illustration_src(ui.skin);
    ui.skin = ui.skin.toggled();
    let dark = illustration_src(ui.skin);
    assert_ne!(light, dark);
    assert_eq!(ui, UiState { skin: Skin::Dark });
}
