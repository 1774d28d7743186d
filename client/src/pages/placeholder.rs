//! Stand-in body for screens whose presentation is not built yet. The route,
//! its parameters and its guard are real; only the content is a stub.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

use escenarte::routes::Screen;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

pub fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Landing => "Inicio",
        Screen::Login => "Iniciar Sesión",
        Screen::Register => "Crear una cuenta",
        Screen::Offers => "Ofertas",
        Screen::OfferDetail => "Detalle de la oferta",
        Screen::Dashboard => "Dashboard",
        Screen::OwnProfile => "Mi Perfil",
        Screen::UserProfile => "Perfil",
        Screen::Inbox => "Mensajes",
        Screen::Conversation => "Conversación",
        Screen::EventHistory => "Historial de eventos",
        Screen::ApplyToOffer => "Postularse",
        Screen::MyApplications => "Mis Postulaciones",
        Screen::CreateOffer => "Publicar Oferta",
        Screen::EditOffer => "Editar Oferta",
        Screen::OfferApplications => "Postulaciones recibidas",
        Screen::MyOffers => "Mis Ofertas",
        Screen::Payment => "Pago",
        Screen::NotFound => "Página no encontrada",
    }
}

#[component]
pub fn PlaceholderPage(screen: Screen) -> impl IntoView {
    let location = use_location();

    view! {
        <div class="placeholder-page">
            <h1>{screen_title(screen)}</h1>
            <p class="placeholder-page__path">{move || location.pathname.get()}</p>
        </div>
    }
}
