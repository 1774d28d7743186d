//! Route guard: pure decisions over a [`SessionSnapshot`].
//!
//! DESIGN
//! ======
//! Two variants. Protected screens classify into
//! `Checking → Unauthenticated | Authorized | Forbidden`; guest-only screens
//! (login, registration) into `Checking → Anonymous | AlreadyAuthenticated`.
//! Nothing is decided while the session is loading. Role requirements match
//! by exact wire string; there is no hierarchy.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{Access, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH, Screen};
use crate::session::SessionSnapshot;
use crate::types::Role;

/// What a screen should do on this render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: show a neutral placeholder.
    Checking,
    Render,
    Redirect { to: &'static str, replace: bool },
}

impl GuardDecision {
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedState {
    Checking,
    Unauthenticated,
    Authorized,
    Forbidden,
}

impl ProtectedState {
    #[must_use]
    pub fn classify(snapshot: &SessionSnapshot, required_role: Option<&Role>) -> Self {
        if snapshot.loading {
            return Self::Checking;
        }
        let Some(user) = &snapshot.user else {
            return Self::Unauthenticated;
        };
        match required_role {
            Some(required) if !role_matches(&user.role, required) => Self::Forbidden,
            _ => Self::Authorized,
        }
    }

    #[must_use]
    pub fn decision(self) -> GuardDecision {
        match self {
            Self::Checking => GuardDecision::Checking,
            Self::Authorized => GuardDecision::Render,
            Self::Unauthenticated => GuardDecision::Redirect { to: LOGIN_PATH, replace: true },
            Self::Forbidden => GuardDecision::Redirect { to: HOME_PATH, replace: true },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestState {
    Checking,
    Anonymous,
    AlreadyAuthenticated,
}

impl GuestState {
    #[must_use]
    pub fn classify(snapshot: &SessionSnapshot) -> Self {
        if snapshot.loading {
            Self::Checking
        } else if snapshot.is_authenticated() {
            Self::AlreadyAuthenticated
        } else {
            Self::Anonymous
        }
    }

    #[must_use]
    pub fn decision(self) -> GuardDecision {
        match self {
            Self::Checking => GuardDecision::Checking,
            Self::Anonymous => GuardDecision::Render,
            Self::AlreadyAuthenticated => GuardDecision::Redirect { to: DASHBOARD_PATH, replace: false },
        }
    }
}

/// Decision for a protected screen.
#[must_use]
pub fn protect(snapshot: &SessionSnapshot, required_role: Option<&Role>) -> GuardDecision {
    ProtectedState::classify(snapshot, required_role).decision()
}

/// Decision for a guest-only screen.
#[must_use]
pub fn guest_only(snapshot: &SessionSnapshot) -> GuardDecision {
    GuestState::classify(snapshot).decision()
}

/// Decision for any screen in the table.
#[must_use]
pub fn evaluate(screen: Screen, snapshot: &SessionSnapshot) -> GuardDecision {
    match screen.access() {
        Access::Open => GuardDecision::Render,
        Access::GuestOnly => guest_only(snapshot),
        Access::Protected(role) => protect(snapshot, role.as_ref()),
    }
}

/// Exact string equality on the wire value.
#[must_use]
pub fn role_matches(actual: &Role, required: &Role) -> bool {
    !actual.as_str().is_empty() && actual.as_str() == required.as_str()
}
