//! Root application component with routing and context providers.

use escenarte::routes::Screen;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::guard::{ProtectedRoute, PublicRoute};
use crate::components::navbar::Navbar;
use crate::pages::{
    dashboard::DashboardPage, inbox::InboxPage, landing::LandingPage, login::LoginPage, not_found::NotFoundPage,
    offers::OffersPage, placeholder::PlaceholderPage, register::RegisterPage,
};
use crate::state::app::{client_config, provide_session, start_hydration};
use crate::util::navigation::NavigationBridge;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Signed-in placeholder screen, guarded by its own access rule.
fn protected_placeholder(screen: Screen) -> impl IntoView {
    view! {
        <ProtectedRoute screen=screen>
            <PlaceholderPage screen=screen/>
        </ProtectedRoute>
    }
}

/// Root application component.
///
/// Builds the session, provides it to the tree and starts hydration once.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session(&client_config());
    start_hydration(&session);

    view! {
        <Stylesheet id="leptos" href="/pkg/escenarte.css"/>
        <Title text="EscenArte"/>

        <Router>
            <NavigationBridge/>
            <Navbar/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/ofertas") view=OffersPage/>
                    <Route path=path!("/ofertas/:id") view=|| view! { <PlaceholderPage screen=Screen::OfferDetail/> }/>

                    <Route
                        path=path!("/login")
                        view=|| view! { <PublicRoute screen=Screen::Login><LoginPage/></PublicRoute> }
                    />
                    <Route
                        path=path!("/register")
                        view=|| view! { <PublicRoute screen=Screen::Register><RegisterPage/></PublicRoute> }
                    />

                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute screen=Screen::Dashboard><DashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/mensajes")
                        view=|| view! { <ProtectedRoute screen=Screen::Inbox><InboxPage/></ProtectedRoute> }
                    />
                    <Route path=path!("/profile") view=|| protected_placeholder(Screen::OwnProfile)/>
                    <Route path=path!("/profile/:id") view=|| protected_placeholder(Screen::UserProfile)/>
                    <Route path=path!("/mensajes/:userId") view=|| protected_placeholder(Screen::Conversation)/>
                    <Route path=path!("/historial") view=|| protected_placeholder(Screen::EventHistory)/>

                    <Route path=path!("/ofertas/:id/postular") view=|| protected_placeholder(Screen::ApplyToOffer)/>
                    <Route path=path!("/mis-postulaciones") view=|| protected_placeholder(Screen::MyApplications)/>

                    <Route path=path!("/crear-oferta") view=|| protected_placeholder(Screen::CreateOffer)/>
                    <Route path=path!("/ofertas/:id/editar") view=|| protected_placeholder(Screen::EditOffer)/>
                    <Route
                        path=path!("/ofertas/:id/postulaciones")
                        view=|| protected_placeholder(Screen::OfferApplications)
                    />
                    <Route path=path!("/mis-ofertas") view=|| protected_placeholder(Screen::MyOffers)/>
                    <Route
                        path=path!("/pagos/:ofertaId/:postulacionId")
                        view=|| protected_placeholder(Screen::Payment)
                    />
                </Routes>
            </main>
        </Router>
    }
}
