//! Job offers ("ofertas") posted by organizers.

#[cfg(test)]
#[path = "offers_test.rs"]
mod offers_test;

use serde::{Deserialize, Serialize};

use super::applications::ApplicationStatus;
use super::{PartyRef, segment};
use crate::error::ApiError;
use crate::gateway::{ApiRequest, RequestGateway};
use crate::types::{Role, User, null_as_default};

pub const OFFERS_ENDPOINT: &str = "/ofertas";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Offer {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "titulo", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    /// ISO-8601 event date as sent by the backend.
    #[serde(rename = "fechaEvento", default)]
    pub event_date: Option<String>,
    #[serde(rename = "genero", default, deserialize_with = "null_as_default")]
    pub genre: String,
    #[serde(rename = "ubicacion", default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(alias = "organizador", default)]
    pub organizer: Option<PartyRef>,
    #[serde(rename = "postulaciones", default, deserialize_with = "null_as_default")]
    pub applications: Vec<OfferApplication>,
    #[serde(rename = "fechaCreacion", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// An application as embedded in an offer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OfferApplicationWire")]
pub struct OfferApplication {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "musico", skip_serializing_if = "Option::is_none")]
    pub musician: Option<PartyRef>,
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<ApplicationStatus>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OfferApplicationWire {
    Id(String),
    Embedded {
        #[serde(rename = "_id", alias = "id", default)]
        id: String,
        #[serde(alias = "musician", default)]
        musico: Option<PartyRef>,
        #[serde(default)]
        estado: Option<ApplicationStatus>,
    },
}

impl From<OfferApplicationWire> for OfferApplication {
    fn from(wire: OfferApplicationWire) -> Self {
        match wire {
            OfferApplicationWire::Id(id) => Self { id, musician: None, status: None },
            OfferApplicationWire::Embedded { id, musico, estado } => Self { id, musician: musico, status: estado },
        }
    }
}

/// An offer referenced from another document, either by id or populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfferLink {
    Id(String),
    Populated(Box<Offer>),
}

impl OfferLink {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Populated(offer) => &offer.id,
        }
    }

    #[must_use]
    pub fn offer(&self) -> Option<&Offer> {
        match self {
            Self::Id(_) => None,
            Self::Populated(offer) => Some(offer),
        }
    }
}

impl Offer {
    #[must_use]
    pub fn organizer_id(&self) -> Option<&str> {
        self.organizer.as_ref().map(|o| o.id.as_str())
    }

    /// True when `user` is an organizer and created this offer.
    #[must_use]
    pub fn is_owned_by(&self, user: &User) -> bool {
        user.role == Role::Organizer && self.organizer_id() == Some(user.id.as_str())
    }

    /// True when `user_id` already applied to this offer.
    #[must_use]
    pub fn has_applicant(&self, user_id: &str) -> bool {
        self.applications
            .iter()
            .any(|a| a.musician.as_ref().is_some_and(|m| m.id == user_id))
    }

    #[must_use]
    pub fn application(&self, application_id: &str) -> Option<&OfferApplication> {
        self.applications.iter().find(|a| a.id == application_id)
    }
}

/// Listing filter. Empty fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferFilter {
    pub genre: Option<String>,
    pub location: Option<String>,
    pub organizer: Option<String>,
}

impl OfferFilter {
    #[must_use]
    pub fn by_organizer(organizer_id: &str) -> Self {
        Self { organizer: Some(organizer_id.to_owned()), ..Self::default() }
    }

    fn apply(&self, mut request: ApiRequest) -> ApiRequest {
        let pairs = [("genero", &self.genre), ("ubicacion", &self.location), ("organizer", &self.organizer)];
        for (key, value) in pairs {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                request = request.query(key, value);
            }
        }
        request
    }
}

/// Editable offer fields, sent on create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OfferDraft {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// `YYYY-MM-DD` as produced by a date input.
    #[serde(rename = "fechaEvento")]
    pub event_date: String,
    #[serde(rename = "genero")]
    pub genre: String,
    #[serde(rename = "ubicacion")]
    pub location: String,
}

impl OfferDraft {
    /// Prefill an edit form from an existing offer. The date is cut to its
    /// calendar part.
    #[must_use]
    pub fn from_offer(offer: &Offer) -> Self {
        let event_date = offer
            .event_date
            .as_deref()
            .map(|d| d.get(..10).unwrap_or(d).to_owned())
            .unwrap_or_default();
        Self {
            title: offer.title.clone(),
            description: offer.description.clone(),
            event_date,
            genre: offer.genre.clone(),
            location: offer.location.clone(),
        }
    }
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn list(gateway: &RequestGateway, filter: &OfferFilter) -> Result<Vec<Offer>, ApiError> {
    gateway.fetch_json(filter.apply(ApiRequest::get(OFFERS_ENDPOINT))).await
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn get(gateway: &RequestGateway, offer_id: &str) -> Result<Offer, ApiError> {
    gateway.get_json(&format!("{OFFERS_ENDPOINT}/{}", segment(offer_id))).await
}

/// Create an offer; the backend assigns the id and organizer.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn create(gateway: &RequestGateway, draft: &OfferDraft) -> Result<Offer, ApiError> {
    let offer: Offer = gateway.post_json(OFFERS_ENDPOINT, draft).await?;
    tracing::info!(offer_id = %offer.id, "offer created");
    Ok(offer)
}

/// Replace the editable fields of an offer. The response body is ignored.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn update(gateway: &RequestGateway, offer_id: &str, draft: &OfferDraft) -> Result<(), ApiError> {
    let request = ApiRequest::put(format!("{OFFERS_ENDPOINT}/{}", segment(offer_id))).json(draft)?;
    gateway.execute(request).await?;
    tracing::info!(offer_id, "offer updated");
    Ok(())
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn delete(gateway: &RequestGateway, offer_id: &str) -> Result<(), ApiError> {
    gateway.delete(&format!("{OFFERS_ENDPOINT}/{}", segment(offer_id))).await?;
    tracing::info!(offer_id, "offer deleted");
    Ok(())
}
