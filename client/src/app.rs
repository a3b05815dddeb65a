//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_toggle::ThemeToggle;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::{ability::AbilityState, auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, ability and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ability = RwSignal::new(AbilityState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ability);
    provide_context(ui);

    // Browser-only state is restored after hydration so SSR markup matches.
    Effect::new(move || {
        let restored = crate::state::auth::restore();
        if let Some(session) = &restored {
            ability.update(|a| a.update(session.ability()));
        }
        auth.update(|a| {
            a.session = restored;
            a.loading = false;
        });

        let skin = crate::util::skin::read_preference();
        crate::util::skin::apply(skin);
        ui.update(|u| u.skin = skin);
    });

    view! {
        <Title text="Crear cuenta"/>

        <Router>
            <ThemeToggle/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
            </Routes>
        </Router>
    }
}
