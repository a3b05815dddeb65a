//! Register page: username, email, password and terms acceptance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form state and the submit protocol live in `register_form`; this module
//! binds them to inputs and wires the auth, ability and router contexts in as
//! the page's [`RegistrationPorts`].

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::register_form::{Field, RegisterForm, RegistrationPorts, submit};
use crate::components::password_input::PasswordInput;
use crate::net::api::{self, ApiError};
use crate::net::types::{AbilityRule, RegisterRequest, RegisterResponse, Session};
use crate::state::ability::AbilityState;
use crate::state::auth::AuthState;
use crate::state::ui::{Skin, UiState};

const LOGO_SRC: &str = "/images/logo/logotipo-completo-transparencia.png";
const ILLUSTRATION_LIGHT: &str = "/images/pages/register-v2.svg";
const ILLUSTRATION_DARK: &str = "/images/pages/register-v2-dark.svg";

/// Illustration asset for the current skin.
#[must_use]
pub fn illustration_src(skin: Skin) -> &'static str {
    match skin {
        Skin::Light => ILLUSTRATION_LIGHT,
        Skin::Dark => ILLUSTRATION_DARK,
    }
}

/// Contexts and router seen by the submit protocol.
#[derive(Clone)]
struct PagePorts<N> {
    auth: RwSignal<AuthState>,
    ability: RwSignal<AbilityState>,
    navigate: N,
}

impl<N> RegistrationPorts for PagePorts<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn register(&self, request: RegisterRequest) -> impl Future<Output = Result<RegisterResponse, ApiError>> {
        api::register(request)
    }

    fn set_capabilities(&self, rules: Vec<AbilityRule>) {
        self.ability.update(|a| a.update(rules));
    }

    fn set_session(&self, session: Session) {
        self.auth.update(|a| a.login(session));
    }

    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Inline error under a field. Presence-only errors render nothing here;
/// the input's `is-invalid` class carries them.
#[component]
fn FieldFeedback(form: RwSignal<RegisterForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|f| f.errors.message(field).map(str::to_owned))
            .map(|message| view! { <div class="invalid-feedback">{message}</div> })
    }
}

/// Register page — renders the form and runs the registration flow.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ability = expect_context::<RwSignal<AbilityState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let ports = PagePorts { auth, ability, navigate: use_navigate() };

    let form = RwSignal::new(RegisterForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(RegisterForm::begin_submit).flatten() else {
            return;
        };
        let ports = ports.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit(&ports, request).await;
            form.try_update(|f| f.settle(&outcome));
        });
    };

    let invalid = move |field: Field| form.with(|f| f.errors.has(field));
    let text = move |field: Field| form.with(|f| f.input.text(field).unwrap_or_default().to_owned());

    view! {
        <div class="auth-wrapper auth-cover">
            <div class="auth-inner">
                <span class="brand-logo">
                    <img src=LOGO_SRC width="100" alt="logo"/>
                </span>
                <div class="auth-illustration">
                    <img src=move || illustration_src(ui.get().skin) alt="Register"/>
                </div>
                <div class="auth-bg">
                    <h2 class="auth-title">"Crea tu cuenta y inicia esta eventura 🚀"</h2>
                    <p class="auth-subtitle">"Crea tu cuenta!"</p>

                    <form class="auth-register-form" on:submit=on_submit>
                        <Show when=move || form.with(|f| f.failure.is_some())>
                            <div class="alert alert-danger" role="alert">
                                {move || form.with(|f| f.failure.clone().unwrap_or_default())}
                            </div>
                        </Show>

                        <div class="mb-1">
                            <label class="form-label" for="register-username">"Usuario"</label>
                            <input
                                id="register-username"
                                class="form-control"
                                class:is-invalid=move || invalid(Field::Username)
                                type="text"
                                autofocus
                                placeholder="johndoe"
                                prop:value=move || text(Field::Username)
                                on:input=move |ev| form.update(|f| f.set_text(Field::Username, event_target_value(&ev)))
                            />
                            <FieldFeedback form field=Field::Username/>
                        </div>

                        <div class="mb-1">
                            <label class="form-label" for="register-email">"Correo"</label>
                            <input
                                id="register-email"
                                class="form-control"
                                class:is-invalid=move || invalid(Field::Email)
                                type="email"
                                placeholder="john@example.com"
                                prop:value=move || text(Field::Email)
                                on:input=move |ev| form.update(|f| f.set_text(Field::Email, event_target_value(&ev)))
                            />
                            <FieldFeedback form field=Field::Email/>
                        </div>

                        <div class="mb-1">
                            <label class="form-label" for="register-password">"Contraseña"</label>
                            <PasswordInput
                                id="register-password"
                                value=Signal::derive(move || text(Field::Password))
                                invalid=Signal::derive(move || invalid(Field::Password))
                                on_input=Callback::new(move |value: String| form.update(|f| f.set_text(Field::Password, value)))
                            />
                            <FieldFeedback form field=Field::Password/>
                        </div>

                        <div class="form-check mb-1">
                            <input
                                id="terms"
                                class="form-check-input"
                                class:is-invalid=move || invalid(Field::Terms)
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.input.terms)
                                on:change=move |ev| form.update(|f| f.set_terms(event_target_checked(&ev)))
                            />
                            <label class="form-check-label" for="terms">
                                "Acceptar"
                                <a class="ms-25" href="/" on:click=|ev| ev.prevent_default()>
                                    "privacidad y termino"
                                </a>
                            </label>
                        </div>

                        <button
                            class="btn btn-warning w-100"
                            type="submit"
                            disabled=move || form.with(|f| f.submitting)
                        >
                            "Crear cuenta"
                        </button>
                    </form>

                    <p class="text-center mt-2">
                        <span class="me-25">"Ya tienes cuenta?"</span>
                        <a href="/login">
                            <span>"Iniciar session"</span>
                        </a>
                    </p>
                </div>
            </div>
        </div>
    }
}
