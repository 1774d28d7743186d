//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A reactive mirror of the core `SessionStore`. The store pushes every
//! transition into an `RwSignal<AuthState>` so guards and user-aware
//! components re-render; nothing writes this signal except that subscription.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use escenarte::session::SessionSnapshot;
use escenarte::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// Matches a store that has not hydrated yet.
    fn default() -> Self {
        Self::from(SessionSnapshot::initial())
    }
}

impl From<SessionSnapshot> for AuthState {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self { user: snapshot.user, loading: snapshot.loading }
    }
}

impl From<&SessionSnapshot> for AuthState {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self::from(snapshot.clone())
    }
}

impl AuthState {
    /// The core view the guard evaluates.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot { user: self.user.clone(), loading: self.loading }
    }

    pub fn role(&self) -> Option<&Role> {
        self.user.as_ref().map(|u| &u.role)
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map(|u| u.name.clone()).unwrap_or_default()
    }
}
