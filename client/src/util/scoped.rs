//! Screen-scoped request helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages issue their backend calls from `spawn_local`. A page that has been
//! navigated away from must not write the late result into its signals, so
//! every page takes a `MountScope` tied to its reactive owner and wraps its
//! requests in `MountScope::run`.

#[cfg(test)]
#[path = "scoped_test.rs"]
mod scoped_test;

use escenarte::ApiError;
use escenarte::scope::MountScope;
use leptos::prelude::*;

/// A `MountScope` that unmounts when the calling component is cleaned up.
pub fn use_mount_scope() -> MountScope {
    let scope = MountScope::new();
    let on_drop = scope.clone();
    on_cleanup(move || on_drop.unmount());
    scope
}

/// Fetch status of one screen-level resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Run `fetch` in the background and store its result in `target`, unless
/// the page unmounted first.
pub fn load_into<T, F>(scope: &MountScope, target: RwSignal<Loadable<T>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let scope = scope.clone();
    leptos::task::spawn_local(async move {
        if let Some(result) = scope.run(fetch).await {
            target.set(Loadable::from_result(result));
        }
    });
}
