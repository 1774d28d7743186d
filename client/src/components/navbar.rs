//! Top navigation bar with role-aware links.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use escenarte::routes::Screen;
use escenarte::{Role, SessionStore};
use leptos::prelude::*;

use crate::state::auth::AuthState;

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

fn link(label: &'static str, screen: Screen) -> NavLink {
    NavLink { label, href: screen.pattern() }
}

/// Links visible for `state`. Nothing session-dependent is shown while the
/// session is still loading.
pub fn nav_links(state: &AuthState) -> Vec<NavLink> {
    let mut links = vec![link("Inicio", Screen::Landing), link("Ofertas", Screen::Offers)];
    if state.loading {
        return links;
    }
    match state.role() {
        None => {
            links.push(link("Iniciar Sesión", Screen::Login));
            links.push(link("Registrarse", Screen::Register));
        }
        Some(role) => {
            links.push(link("Dashboard", Screen::Dashboard));
            links.push(link("Mensajes", Screen::Inbox));
            match role {
                Role::Musician => links.push(link("Mis Postulaciones", Screen::MyApplications)),
                Role::Organizer => links.push(link("Mis Ofertas", Screen::MyOffers)),
                Role::Unrecognized(_) => {}
            }
            links.push(link("Mi Perfil", Screen::OwnProfile));
        }
    }
    links
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();

    let on_logout = move |_| session.logout();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=Screen::Landing.pattern()>"EscenArte"</a>
            <ul class="navbar__links">
                {move || {
                    nav_links(&auth.get())
                        .into_iter()
                        .map(|l| view! { <li><a href=l.href>{l.label}</a></li> })
                        .collect_view()
                }}
            </ul>
            <Show when=move || auth.get().user.is_some()>
                <span class="navbar__user">
                    {move || auth.get().display_name()}
                    " ("
                    {move || auth.get().role().map(Role::label).unwrap_or_default()}
                    ")"
                </span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Cerrar Sesión"
                </button>
            </Show>
        </nav>
    }
}
