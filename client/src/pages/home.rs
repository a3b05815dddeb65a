//! Home route: greets the session user or points anonymous visitors to
//! registration.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::state::ability::AbilityState;
use crate::state::auth::AuthState;

/// Whether the rules allow ending the session from the home page.
#[must_use]
pub fn can_sign_out(ability: &AbilityState) -> bool {
    ability.can("read", "Auth")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ability = expect_context::<RwSignal<AbilityState>>();

    let greeting = move || {
        auth.with(|a| {
            a.session
                .as_ref()
                .map(|s| s.display_name().unwrap_or("user").to_owned())
        })
    };

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        auth.update(AuthState::logout);
        ability.update(|a| a.update(Vec::new()));
    };

    view! {
        <div class="home-page">
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=move || {
                    view! {
                        <p class="home-page__anon">
                            <a href="/register">"Crear cuenta"</a>
                            " · "
                            <a href="/login">"Iniciar session"</a>
                        </p>
                    }
                }
            >
                <h1>"Bienvenido, " {move || greeting().unwrap_or_default()}</h1>
                <Show when=move || ability.with(can_sign_out)>
                    <button class="btn btn-outline-secondary" type="button" on:click=on_sign_out>
                        "Cerrar sesión"
                    </button>
                </Show>
            </Show>
        </div>
    }
}
