//! Bridge from the session store's `Navigator` seam to the Leptos router.
//!
//! DESIGN
//! ======
//! The session store is built before the router exists, so it cannot hold a
//! `use_navigate` handle. Instead it writes a pending navigation into a
//! signal; `NavigationBridge`, mounted inside `<Router>`, drains the signal
//! and performs the navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use escenarte::session::Navigator;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// A navigation requested outside the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation {
    pub path: String,
    pub replace: bool,
}

impl PendingNavigation {
    pub fn options(&self) -> NavigateOptions {
        NavigateOptions { replace: self.replace, ..NavigateOptions::default() }
    }
}

/// `Navigator` that queues into a signal.
#[derive(Debug, Clone, Copy)]
pub struct SignalNavigator {
    pending: RwSignal<Option<PendingNavigation>>,
}

impl SignalNavigator {
    pub fn new(pending: RwSignal<Option<PendingNavigation>>) -> Self {
        Self { pending }
    }
}

impl Navigator for SignalNavigator {
    fn navigate(&self, path: &str, replace: bool) {
        self.pending.set(Some(PendingNavigation { path: path.to_owned(), replace }));
    }
}

/// Performs queued navigations. Must be rendered inside `<Router>`.
#[component]
pub fn NavigationBridge() -> impl IntoView {
    let pending = expect_context::<RwSignal<Option<PendingNavigation>>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let Some(next) = pending.get() {
            pending.set(None);
            navigate(&next.path, next.options());
        }
    });
}
