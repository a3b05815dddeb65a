//! Light/dark skin toggle shown above every route.

use leptos::prelude::*;

use crate::state::ui::{Skin, UiState};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="theme-toggle"
            type="button"
            title="Toggle dark mode"
            on:click=move |_| {
                let next = crate::util::skin::toggle(ui.get().skin);
                ui.update(|u| u.skin = next);
            }
        >
            {move || match ui.get().skin {
                Skin::Light => "☾",
                Skin::Dark => "☀",
            }}
        </button>
    }
}
