//! Login route target for the register page's "already have an account" link.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Iniciar session"</h1>
            <p>
                "No tienes cuenta? "
                <a href="/register">"Crea tu cuenta"</a>
            </p>
        </div>
    }
}
