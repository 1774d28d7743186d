//! Login page: email + password against the backend.
//!
//! Backend rejections are shown inline; nothing is navigated on failure. On
//! success the session store has already persisted the token and the page
//! moves on to the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use escenarte::routes::{DASHBOARD_PATH, Screen};
use escenarte::types::Credentials;
use escenarte::{ApiError, SessionStore};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

const LOGIN_FALLBACK: &str = "Error al iniciar sesión. Por favor intenta nuevamente.";
const MISSING_FIELDS: &str = "Introduce tu correo y tu contraseña.";
pub(crate) const REGISTERED_NOTICE: &str = "Registro completado. Ya puedes iniciar sesión.";

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let credentials = Credentials::new(email, password);
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(credentials)
}

/// Inline text for a failed login. Only a backend rejection carries a
/// message worth showing verbatim.
fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Authentication { message, .. } if !message.is_empty() => message.clone(),
        _ => LOGIN_FALLBACK.to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let registered = move || query.read().get("registered").is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.login(&credentials).await {
                Ok(_) => navigate(DASHBOARD_PATH, NavigateOptions::default()),
                Err(e) => {
                    error.set(Some(login_error_message(&e)));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"EscenArte"</h1>
                <h2 class="login-card__subtitle">"Iniciar Sesión"</h2>
                <Show when=registered>
                    <p class="login-message login-message--ok">{REGISTERED_NOTICE}</p>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="tu@correo.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "¿No tienes una cuenta? "
                    <a href=Screen::Register.pattern()>"Regístrate"</a>
                </p>
            </div>
        </div>
    }
}
