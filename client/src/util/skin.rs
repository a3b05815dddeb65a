//! Skin preference: restore, apply and persist.
//!
//! The stored `skin` entry wins; without one the system color scheme decides.
//! The active skin is mirrored to `data-theme` on `<html>`. Off the browser
//! every call falls back to [`Skin::Light`] and touches nothing.

#[cfg(test)]
#[path = "skin_test.rs"]
mod skin_test;

use super::storage;
use crate::state::ui::Skin;

const STORAGE_KEY: &str = "skin";

/// Skin chosen by the system color scheme.
fn system_skin() -> Skin {
    #[cfg(feature = "hydrate")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Skin::Dark } else { Skin::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Skin::Light
    }
}

/// Skin to start with.
pub fn read_preference() -> Skin {
    match storage::load_text(STORAGE_KEY) {
        Some(raw) => Skin::parse(&raw).unwrap_or_else(|| {
            log::warn!("ignoring unknown stored skin {raw:?}");
            system_skin()
        }),
        None => system_skin(),
    }
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(skin: Skin) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", skin.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = skin;
    }
}

/// Switch to the other skin, apply it and remember it.
pub fn toggle(current: Skin) -> Skin {
    let next = current.toggled();
    apply(next);
    storage::save_text(STORAGE_KEY, next.as_str());
    log::debug!("skin set to {}", next.as_str());
    next
}
