//! Password input with a show/hide toggle.

#[cfg(test)]
#[path = "password_input_test.rs"]
mod password_input_test;

use leptos::prelude::*;

/// Input `type` for the current visibility.
#[must_use]
pub fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] id: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] invalid: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    view! {
        <div class="input-group input-group-merge" class:is-invalid=move || invalid.get()>
            <input
                id=id
                class="form-control"
                class:is-invalid=move || invalid.get()
                type=move || input_type(visible.get())
                placeholder="············"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <button
                class="input-group-text"
                type="button"
                aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || if visible.get() { "🙈" } else { "👁" }}
            </button>
        </div>
    }
}

