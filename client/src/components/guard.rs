//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed screen is wrapped in exactly one of these. The decision comes
//! from `escenarte::guard::evaluate` over the screen's access rule and the
//! mirrored `AuthState`; this module only turns it into markup. While the
//! session is still hydrating nothing redirects.

use escenarte::guard::{self, GuardDecision};
use escenarte::routes::Screen;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

/// Text shown while the session is still resolving.
pub const CHECKING_TEXT: &str = "Cargando...";

/// Guard for signed-in screens. The role requirement comes from `screen`.
#[component]
pub fn ProtectedRoute(screen: Screen, children: ChildrenFn) -> impl IntoView {
    guarded(screen, children)
}

/// Guard for screens only guests should see (login, register).
#[component]
pub fn PublicRoute(screen: Screen, children: ChildrenFn) -> impl IntoView {
    guarded(screen, children)
}

fn guarded(screen: Screen, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| guard::evaluate(screen, &auth.get().snapshot()));

    move || match decision.get() {
        GuardDecision::Checking => view! { <p class="guard-checking">{CHECKING_TEXT}</p> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect { to, replace } => {
            let options = NavigateOptions { replace, ..NavigateOptions::default() };
            view! { <Redirect path=to options=options/> }.into_any()
        }
    }
}
