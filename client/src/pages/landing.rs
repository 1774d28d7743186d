//! Public landing page. Greets returning users with shortcuts for their role
//! and invites guests to sign up as either account type.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use escenarte::Role;
use escenarte::routes::{REGISTER_PATH, Screen};
use leptos::prelude::*;

use crate::components::navbar::NavLink;
use crate::state::auth::AuthState;

/// Shortcuts shown to a signed-in user of `role`.
pub fn role_shortcuts(role: &Role) -> Vec<NavLink> {
    let link = |label, screen: Screen| NavLink { label, href: screen.pattern() };
    match role {
        Role::Musician => vec![
            link("Ver Ofertas", Screen::Offers),
            link("Mi Perfil", Screen::OwnProfile),
            link("Mis Postulaciones", Screen::MyApplications),
        ],
        Role::Organizer => vec![
            link("Publicar Oferta", Screen::CreateOffer),
            link("Gestionar Ofertas", Screen::MyOffers),
            link("Mi Perfil", Screen::OwnProfile),
        ],
        Role::Unrecognized(_) => vec![link("Mi Perfil", Screen::OwnProfile)],
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let signed_in = move || {
        let state = auth.get();
        let role = state.role()?.clone();
        Some((state.display_name(), role))
    };

    move || match signed_in() {
        Some((name, role)) => view! {
            <section class="hero hero--member">
                <h1>{format!("¡Bienvenido de nuevo, {name}!")}</h1>
                <div class="hero__actions">
                    {role_shortcuts(&role)
                        .into_iter()
                        .map(|l| view! { <a class="btn btn-primary" href=l.href>{l.label}</a> })
                        .collect_view()}
                </div>
            </section>
        }
        .into_any(),
        None => view! {
            <section class="hero">
                <h1>"Conectando talento musical con oportunidades reales"</h1>
                <p>"Músicos y organizadores de eventos, en un solo lugar."</p>
                <div class="hero__actions">
                    <a class="btn btn-primary" href=format!("{REGISTER_PATH}?type={}", Role::MUSICIAN)>"Soy Músico"</a>
                    <a class="btn btn-secondary" href=format!("{REGISTER_PATH}?type={}", Role::ORGANIZER)>"Soy Organizador"</a>
                </div>
            </section>
        }
        .into_any(),
    }
}
