//! Session store: the single source of truth for who is using this client.
//!
//! ARCHITECTURE
//! ============
//! The persisted token slot ([`TokenStore`]) is shared with the request
//! gateway, so there is exactly one token: whatever the slot holds right now.
//! In memory the store keeps only the resolved user and the `loading` flag.
//! `is_authenticated` is derived from the user and cannot be set directly.
//!
//! LIFECYCLE
//! =========
//! A store starts with `loading = true`. [`SessionStore::hydrate`] must be
//! called once at start-up; it resolves the persisted token against the
//! backend and flips `loading` to false exactly once, whatever the outcome.
//! A hydration result is dropped if the token changed while it was in flight
//! (logout or a fresh login won the race).
//!
//! Mutations happen only through `login`, `hydrate` and `logout`. Observers
//! registered with [`SessionStore::subscribe`] are called after each one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde_json::Value;

use crate::error::ApiError;
use crate::gateway::RequestGateway;
use crate::routes::HOME_PATH;
use crate::storage::TokenStore;
use crate::types::{Credentials, LoginResponse, Registration, Role, User};

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const REGISTER_ENDPOINT: &str = "/auth/register";
pub const ME_ENDPOINT: &str = "/users/me";

/// Navigation side effect used by `logout`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str, replace: bool);
}

/// Point-in-time view of the session, as read by guards and screens.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionSnapshot {
    /// State before hydration has finished.
    #[must_use]
    pub fn initial() -> Self {
        Self { user: None, loading: true }
    }

    /// Settled state holding `user`.
    #[must_use]
    pub fn settled(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|u| &u.role)
    }
}

/// What start-up hydration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// No persisted token; the session starts logged out.
    NoToken,
    /// The persisted token resolved to a user.
    Restored,
    /// The backend call failed; token and user were cleared.
    Cleared,
    /// The token changed while the call was in flight; the result was ignored.
    Discarded,
    /// Hydration had already run for this store.
    Skipped,
}

pub type SessionListener = Arc<dyn Fn(&SessionSnapshot) + Send + Sync>;

struct Inner {
    gateway: RequestGateway,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    state: RwLock<SessionSnapshot>,
    hydration_started: AtomicBool,
    listeners: Mutex<Vec<SessionListener>>,
}

/// Process-wide session. Clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// `tokens` must be the same store `gateway` reads from.
    #[must_use]
    pub fn new(gateway: RequestGateway, tokens: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner: Arc::new(Inner {
                gateway,
                tokens,
                navigator,
                state: RwLock::new(SessionSnapshot::initial()),
                hydration_started: AtomicBool::new(false),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.snapshot().user
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .loading
    }

    /// The persisted bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.inner.tokens.load()
    }

    /// Gateway sharing this session's token slot.
    #[must_use]
    pub fn gateway(&self) -> &RequestGateway {
        &self.inner.gateway
    }

    /// Register an observer called with the new snapshot after every mutation.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&SessionSnapshot) + Send + Sync + 'static,
    {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Resolve the persisted token into a user. Runs at most once per store.
    ///
    /// Failures never surface: any error clears the token and the session
    /// settles logged out.
    pub async fn hydrate(&self) -> HydrationOutcome {
        if self.inner.hydration_started.swap(true, Ordering::SeqCst) {
            return HydrationOutcome::Skipped;
        }

        let Some(token) = self.inner.tokens.load().filter(|t| !t.is_empty()) else {
            self.update(|s| s.loading = false);
            tracing::debug!("no stored session");
            return HydrationOutcome::NoToken;
        };

        let result = self.inner.gateway.get_json::<User>(ME_ENDPOINT).await;
        let still_current = self.inner.tokens.load().as_deref() == Some(token.as_str());

        match result {
            Ok(user) if still_current => {
                tracing::info!(user_id = %user.id, role = %user.role, "session restored");
                self.update(|s| {
                    s.user = Some(user);
                    s.loading = false;
                });
                HydrationOutcome::Restored
            }
            Err(e) if still_current => {
                tracing::info!(error = %e, "stored session rejected; continuing logged out");
                self.inner.tokens.clear();
                self.update(|s| {
                    s.user = None;
                    s.loading = false;
                });
                HydrationOutcome::Cleared
            }
            _ => {
                tracing::debug!("session changed during hydration; result dropped");
                self.update(|s| s.loading = false);
                HydrationOutcome::Discarded
            }
        }
    }

    /// Exchange credentials for a token and user.
    ///
    /// On success the token is persisted (overwriting any previous one) and
    /// the user becomes current. Navigation is left to the caller.
    ///
    /// # Errors
    ///
    /// [`ApiError::Authentication`] when the backend rejects the credentials,
    /// [`ApiError::Network`] when the request cannot complete, or
    /// [`ApiError::Decode`] for a malformed success body, or
    /// [`ApiError::Storage`] when the token cannot be persisted. No state
    /// changes on error.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let response = match self
            .inner
            .gateway
            .post_json::<_, LoginResponse>(LOGIN_ENDPOINT, credentials)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let e = e.into_authentication();
                tracing::info!(error = %e, "login failed");
                return Err(e);
            }
        };
        if response.token.is_empty() {
            return Err(ApiError::Decode("login response carried an empty token".to_owned()));
        }

        if let Err(e) = self.inner.tokens.save(&response.token) {
            tracing::warn!(error = %e, "login succeeded but the token could not be stored");
            return Err(e.into());
        }
        let user = response.user.clone();
        tracing::info!(user_id = %user.id, role = %user.role, "login succeeded");
        self.update(|s| s.user = Some(user));
        Ok(response)
    }

    /// Submit a registration. Does not authenticate the caller.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] when the backend reports invalid or duplicate
    /// fields, [`ApiError::Network`] when the request cannot complete.
    pub async fn register(&self, registration: &Registration) -> Result<Value, ApiError> {
        self.inner
            .gateway
            .post_json::<_, Value>(REGISTER_ENDPOINT, registration)
            .await
            .map_err(|e| {
                let e = e.into_validation();
                tracing::info!(error = %e, role = %registration.role, "registration rejected");
                e
            })
    }

    /// Clear token and user, then navigate to the landing screen. Idempotent.
    pub fn logout(&self) {
        self.inner.tokens.clear();
        let was_authenticated = self.is_authenticated();
        self.update(|s| s.user = None);
        if was_authenticated {
            tracing::info!("logged out");
        }
        self.inner.navigator.navigate(HOME_PATH, false);
    }

    fn update<F>(&self, mutate: F)
    where
        F: FnOnce(&mut SessionSnapshot),
    {
        let snapshot = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            mutate(&mut state);
            state.clone()
        };
        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
