//! Fallback for paths that match no screen.

use escenarte::routes::HOME_PATH;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"La página que buscas no existe."</p>
            <a class="btn btn-primary" href=HOME_PATH>"Volver al inicio"</a>
        </div>
    }
}
