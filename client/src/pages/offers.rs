//! Public offer listing with genre and location filters.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

use escenarte::api::offers::{self, Offer, OfferFilter};
use escenarte::routes::Screen;
use escenarte::SessionStore;
use leptos::prelude::*;

use crate::pages::register::GENRES;
use crate::util::scoped::{Loadable, load_into, use_mount_scope};

/// Calendar day of an ISO-8601 timestamp, or a placeholder.
pub fn event_day(event_date: Option<&str>) -> String {
    match event_date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => date.chars().take(10).collect(),
        None => "Fecha por confirmar".to_owned(),
    }
}

/// Filter from the form fields. Blank fields match everything.
pub fn filter_from_form(genre: &str, location: &str) -> OfferFilter {
    let keep = |v: &str| Some(v.trim().to_owned()).filter(|v| !v.is_empty());
    OfferFilter { genre: keep(genre), location: keep(location), organizer: None }
}

#[component]
pub fn OffersPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let scope = use_mount_scope();
    let state = RwSignal::new(Loadable::<Vec<Offer>>::Loading);
    let genre = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());

    let load = move |filter: OfferFilter| {
        state.set(Loadable::Loading);
        let gateway = session.gateway().clone();
        load_into(&scope, state, async move { offers::list(&gateway, &filter).await });
    };
    load.clone()(OfferFilter::default());

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load(filter_from_form(&genre.get(), &location.get()));
    };

    view! {
        <div class="offers-page">
            <h1>"Ofertas"</h1>
            <form class="offers-page__filters" on:submit=on_filter>
                <select on:change=move |ev| genre.set(event_target_value(&ev))>
                    <option value="">"Todos los géneros"</option>
                    {GENRES
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Ubicación"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Filtrar"</button>
            </form>
            <Show when=move || state.with(Loadable::is_loading)>
                <p>"Cargando ofertas..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error().is_some())>
                <p class="offers-page__error">{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</p>
            </Show>
            <ul class="offers-page__list">
                {move || {
                    state.with(|s| {
                        s.ready().map(|list| {
                            if list.is_empty() {
                                return view! { <li>"No hay ofertas disponibles."</li> }.into_any();
                            }
                            list.iter().map(offer_card).collect_view().into_any()
                        })
                    })
                }}
            </ul>
        </div>
    }
}

fn offer_card(offer: &Offer) -> impl IntoView + use<> {
    let organizer = offer.organizer.as_ref().map(|o| o.display_name("Organizador").to_owned()).unwrap_or_default();
    view! {
        <li class="offer-card">
            <a class="offer-card__title" href=Screen::OfferDetail.href(&[offer.id.as_str()])>{offer.title.clone()}</a>
            <span class="offer-card__date">{event_day(offer.event_date.as_deref())}</span>
            <span class="offer-card__genre">{offer.genre.clone()}</span>
            <span class="offer-card__location">{offer.location.clone()}</span>
            <span class="offer-card__organizer">{organizer}</span>
        </li>
    }
}
