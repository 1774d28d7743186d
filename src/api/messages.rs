//! Direct messaging between users, optionally tied to an offer.
//!
//! The inbox is refreshed by polling [`conversations`] every
//! [`CONVERSATION_POLL_INTERVAL`]; there is no push channel.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::offers::OfferLink;
use super::{PartyRef, segment};
use crate::error::ApiError;
use crate::gateway::{ApiRequest, RequestGateway};
use crate::types::null_as_default;

pub const CHAT_ENDPOINT: &str = "/chat";
pub const CONVERSATION_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// One row of the inbox: the latest exchange with another user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(rename = "ofertaTitulo", default, skip_serializing_if = "Option::is_none")]
    pub offer_title: Option<String>,
    #[serde(rename = "ultimoMensaje", default, deserialize_with = "null_as_default")]
    pub last_message: String,
    #[serde(rename = "fecha", default)]
    pub sent_at: Option<String>,
    #[serde(rename = "noLeidos", default)]
    pub unread: u32,
}

impl ConversationSummary {
    #[must_use]
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub sender: PartyRef,
    pub receiver: PartyRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "oferta", default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<OfferLink>,
    #[serde(default)]
    pub read: bool,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Message {
    #[must_use]
    pub fn is_from(&self, user_id: &str) -> bool {
        self.sender.id == user_id
    }
}

/// Outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    pub receiver: String,
    pub content: String,
    #[serde(rename = "oferta", skip_serializing_if = "Option::is_none")]
    pub offer: Option<String>,
}

impl NewMessage {
    #[must_use]
    pub fn new(receiver: &str, content: &str) -> Self {
        Self { receiver: receiver.to_owned(), content: content.to_owned(), offer: None }
    }

    #[must_use]
    pub fn about_offer(mut self, offer_id: Option<&str>) -> Self {
        self.offer = offer_id.map(str::to_owned);
        self
    }
}

/// The first offer any message in a thread refers to.
#[must_use]
pub fn related_offer_id(messages: &[Message]) -> Option<&str> {
    messages.iter().find_map(|m| m.offer.as_ref().map(OfferLink::id))
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn conversations(gateway: &RequestGateway) -> Result<Vec<ConversationSummary>, ApiError> {
    gateway.get_json(&format!("{CHAT_ENDPOINT}/conversaciones")).await
}

/// Full thread with `user_id`, oldest first as returned by the backend.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn thread(gateway: &RequestGateway, user_id: &str) -> Result<Vec<Message>, ApiError> {
    gateway
        .get_json(&format!("{CHAT_ENDPOINT}/mensajes/{}", segment(user_id)))
        .await
}

/// Send a message. Blank content is rejected without a request.
///
/// # Errors
///
/// [`ApiError::InvalidInput`] for blank content; otherwise gateway failures unchanged.
pub async fn send(gateway: &RequestGateway, message: &NewMessage) -> Result<(), ApiError> {
    if message.content.trim().is_empty() {
        return Err(ApiError::InvalidInput("El mensaje está vacío".to_owned()));
    }
    let request = ApiRequest::post(format!("{CHAT_ENDPOINT}/mensajes")).json(message)?;
    gateway.execute(request).await
}

/// Mark every message from `user_id` as read.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn mark_read(gateway: &RequestGateway, user_id: &str) -> Result<(), ApiError> {
    let request = ApiRequest::put(format!("{CHAT_ENDPOINT}/mensajes/leer/{}", segment(user_id)))
        .json(&serde_json::json!({}))?;
    gateway.execute(request).await
}
