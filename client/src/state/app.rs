//! Session wiring for the application root.
//!
//! ARCHITECTURE
//! ============
//! One `SessionStore` per app instance. It shares a single
//! `BrowserSessionStorage` slot with its gateway, runs on
//! `GlooTransport`, and navigates through a `SignalNavigator`. Every store
//! transition is copied into the `RwSignal<AuthState>` context.
//!
//! Configuration is baked in at build time with `option_env!`, since a WASM
//! bundle has no process environment.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use escenarte::config::{API_BASE_URL_VAR, CONNECT_TIMEOUT_VAR, PAYMENT_KEY_VAR, REQUEST_TIMEOUT_VAR};
use escenarte::{ClientConfig, RequestGateway, SessionStore};
use leptos::prelude::*;

use crate::net::transport::GlooTransport;
use crate::state::auth::AuthState;
use crate::util::navigation::{PendingNavigation, SignalNavigator};
use crate::util::storage::BrowserSessionStorage;

/// Value of a configuration key captured when the bundle was compiled.
pub fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_URL_VAR => option_env!("ESCENARTE_API_BASE_URL"),
        PAYMENT_KEY_VAR => option_env!("ESCENARTE_PAYMENT_PUBLISHABLE_KEY"),
        REQUEST_TIMEOUT_VAR => option_env!("ESCENARTE_REQUEST_TIMEOUT_SECS"),
        CONNECT_TIMEOUT_VAR => option_env!("ESCENARTE_CONNECT_TIMEOUT_SECS"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Build-time config, falling back to defaults if a baked value is invalid.
pub fn client_config() -> ClientConfig {
    config_from(build_env)
}

fn config_from<F>(lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    ClientConfig::from_lookup(lookup).unwrap_or_else(|e| {
        leptos::logging::warn!("invalid build configuration, using defaults: {e}");
        ClientConfig::default()
    })
}

/// Build the session store and provide it, the mirrored auth signal and the
/// pending-navigation signal as context.
pub fn provide_session(config: &ClientConfig) -> SessionStore {
    let pending = RwSignal::new(None::<PendingNavigation>);
    let auth = RwSignal::new(AuthState::default());

    let tokens = Arc::new(BrowserSessionStorage);
    let gateway = RequestGateway::new(&config.api_base_url, tokens.clone(), Arc::new(GlooTransport));
    let session = SessionStore::new(gateway, tokens, Arc::new(SignalNavigator::new(pending)));
    session.subscribe(move |snapshot| auth.set(AuthState::from(snapshot)));

    provide_context(pending);
    provide_context(auth);
    provide_context(session.clone());
    session
}

/// Resolve the persisted token once, in the browser only.
pub fn start_hydration(session: &SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.hydrate().await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
