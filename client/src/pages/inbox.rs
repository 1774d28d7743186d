//! Inbox: one row per conversation, refreshed on a fixed interval while the
//! page is mounted.

#[cfg(test)]
#[path = "inbox_test.rs"]
mod inbox_test;

use escenarte::SessionStore;
use escenarte::api::messages::{self, ConversationSummary};
use escenarte::routes::Screen;
use leptos::prelude::*;

use crate::util::scoped::{Loadable, load_into, use_mount_scope};

pub fn unread_total(conversations: &[ConversationSummary]) -> u32 {
    conversations.iter().map(|c| c.unread).sum()
}

/// Text shown under the counterpart's name.
pub fn preview(conversation: &ConversationSummary) -> String {
    match &conversation.offer_title {
        Some(title) if !title.is_empty() => format!("{title}: {}", conversation.last_message),
        _ => conversation.last_message.clone(),
    }
}

#[component]
pub fn InboxPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let scope = use_mount_scope();
    let state = RwSignal::new(Loadable::<Vec<ConversationSummary>>::Loading);

    let gateway = session.gateway().clone();
    load_into(&scope, state, {
        let gateway = gateway.clone();
        async move { messages::conversations(&gateway).await }
    });

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(messages::CONVERSATION_POLL_INTERVAL).await;
                if !scope.is_mounted() {
                    break;
                }
                match scope.run(messages::conversations(&gateway)).await {
                    Some(Ok(list)) => state.set(Loadable::Ready(list)),
                    Some(Err(e)) => leptos::logging::warn!("inbox refresh failed: {e}"),
                    None => break,
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gateway;
    }

    view! {
        <div class="inbox-page">
            <h1>
                "Mensajes"
                {move || {
                    state.with(|s| s.ready().map(|list| unread_total(list)).filter(|n| *n > 0))
                        .map(|n| view! { <span class="badge">{n}</span> })
                }}
            </h1>
            <Show when=move || state.with(Loadable::is_loading)>
                <p>"Cargando conversaciones..."</p>
            </Show>
            <Show when=move || state.with(|s| s.error().is_some())>
                <p class="inbox-page__error">{move || state.with(|s| s.error().unwrap_or_default().to_owned())}</p>
            </Show>
            <ul class="inbox-page__list">
                {move || {
                    state.with(|s| {
                        s.ready().map(|list| {
                            if list.is_empty() {
                                return view! { <li>"No tienes conversaciones todavía."</li> }.into_any();
                            }
                            list.iter()
                                .map(|c| {
                                    let href = Screen::Conversation.href(&[c.user_id.as_str()]);
                                    let class = if c.has_unread() { "conversation conversation--unread" } else { "conversation" };
                                    view! {
                                        <li class=class>
                                            <a href=href>{c.user_name.clone()}</a>
                                            <p>{preview(c)}</p>
                                        </li>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        })
                    })
                }}
            </ul>
        </div>
    }
}
