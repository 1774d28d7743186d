//! Dashboard page: the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Musicians see their applications grouped by status; organizers see the
//! offers they published with how many musicians applied. Both lists are
//! fetched once per mount through the shared gateway.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use escenarte::api::applications::{self, Application, ApplicationStatus};
use escenarte::api::offers::{self, Offer, OfferFilter};
use escenarte::routes::Screen;
use escenarte::{Role, SessionStore, User};
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::scoped::{Loadable, load_into, use_mount_scope};

/// Application totals per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
}

pub fn status_counts(applications: &[Application]) -> StatusCounts {
    applications.iter().fold(StatusCounts::default(), |mut acc, a| {
        match a.status {
            ApplicationStatus::Pending => acc.pending += 1,
            ApplicationStatus::Accepted => acc.accepted += 1,
            ApplicationStatus::Rejected => acc.rejected += 1,
            ApplicationStatus::Unknown => {}
        }
        acc
    })
}

/// Title of the offer an application points at, if it was populated.
pub fn application_offer_title(application: &Application) -> String {
    application
        .offer
        .as_ref()
        .and_then(|o| o.offer())
        .map_or_else(|| "Oferta".to_owned(), |o| o.title.clone())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-page__self">
                    {move || auth.get().display_name()}
                    " · "
                    {move || auth.get().role().map(Role::label).unwrap_or_default()}
                </span>
            </header>
            {move || {
                let user = auth.get_untracked().user?;
                let role = user.role.clone();
                Some(match role {
                    Role::Musician => view! { <MusicianPanel user=user/> }.into_any(),
                    Role::Organizer => view! { <OrganizerPanel user=user/> }.into_any(),
                    Role::Unrecognized(_) => view! {
                        <p class="dashboard-page__notice">
                            "Tu cuenta no tiene un tipo reconocido. Contacta con soporte."
                        </p>
                    }
                    .into_any(),
                })
            }}
        </div>
    }
}

#[component]
fn MusicianPanel(user: User) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let scope = use_mount_scope();
    let state = RwSignal::new(Loadable::<Vec<Application>>::Loading);

    let gateway = session.gateway().clone();
    load_into(&scope, state, async move { applications::list_for_user(&gateway, &user.id).await });

    view! {
        <section class="dashboard-page__panel">
            <h2>"Mis Postulaciones"</h2>
            <Show when=move || state.with(Loadable::is_loading)>
                <p>"Cargando postulaciones..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error().is_some())>
                <p class="dashboard-page__error">{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</p>
            </Show>
            {move || {
                state.with(|s| {
                    s.ready().map(|apps| {
                        let counts = status_counts(apps);
                        view! {
                            <p class="dashboard-page__counts">
                                {format!(
                                    "{} pendientes · {} aceptadas · {} rechazadas",
                                    counts.pending, counts.accepted, counts.rejected
                                )}
                            </p>
                            <ul class="dashboard-page__list">
                                {apps
                                    .iter()
                                    .map(|a| view! {
                                        <li>
                                            <span>{application_offer_title(a)}</span>
                                            " "
                                            <span class="status">{a.status.label()}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
                })
            }}
            <a class="btn" href=Screen::Offers.pattern()>"Buscar ofertas"</a>
        </section>
    }
}

#[component]
fn OrganizerPanel(user: User) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let scope = use_mount_scope();
    let state = RwSignal::new(Loadable::<Vec<Offer>>::Loading);

    let gateway = session.gateway().clone();
    let filter = OfferFilter::by_organizer(&user.id);
    load_into(&scope, state, async move { offers::list(&gateway, &filter).await });

    view! {
        <section class="dashboard-page__panel">
            <h2>"Mis Ofertas"</h2>
            <Show when=move || state.with(Loadable::is_loading)>
                <p>"Cargando ofertas..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error().is_some())>
                <p class="dashboard-page__error">{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</p>
            </Show>
            <ul class="dashboard-page__list">
                {move || {
                    state.with(|s| {
                        s.ready()
                            .map(|list| {
                                list.iter()
                                    .map(|o| {
                                        let href = Screen::OfferApplications.href(&[o.id.as_str()]);
                                        view! {
                                            <li>
                                                <a href=href>{o.title.clone()}</a>
                                                {format!(" ({} postulaciones)", o.applications.len())}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })
                    })
                }}
            </ul>
            <a class="btn btn-primary" href=Screen::CreateOffer.pattern()>"Publicar Oferta"</a>
        </section>
    }
}
