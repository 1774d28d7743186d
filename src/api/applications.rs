//! Applications ("postulaciones") from musicians to offers.

#[cfg(test)]
#[path = "applications_test.rs"]
mod applications_test;

use serde::{Deserialize, Serialize};

use super::offers::{OFFERS_ENDPOINT, Offer, OfferLink};
use super::{PartyRef, segment};
use crate::error::ApiError;
use crate::gateway::{ApiRequest, RequestGateway};
use crate::types::null_as_default;

pub const USER_APPLICATIONS_ENDPOINT: &str = "/postulaciones";

/// Lifecycle of an application. Anything else the backend sends decodes as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "ACEPTADA")]
    Accepted,
    #[serde(rename = "RECHAZADA")]
    Rejected,
    #[serde(other)]
    Unknown,
}

impl ApplicationStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Accepted => "Aceptada",
            Self::Rejected => "Rechazada",
            Self::Unknown => "Desconocido",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "estado")]
    pub status: ApplicationStatus,
    #[serde(rename = "motivacion", default, deserialize_with = "null_as_default")]
    pub motivation: String,
    #[serde(rename = "fechaPostulacion", default)]
    pub applied_at: Option<String>,
    #[serde(rename = "musico", alias = "musician", default)]
    pub musician: Option<PartyRef>,
    #[serde(rename = "oferta", default)]
    pub offer: Option<OfferLink>,
}

impl Application {
    /// Pending applications may still be withdrawn by the musician.
    #[must_use]
    pub fn can_withdraw(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }

    /// Pending applications may be accepted or rejected by the organizer.
    #[must_use]
    pub fn can_decide(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }

    /// Once accepted, both parties may open a conversation.
    #[must_use]
    pub fn can_contact(&self) -> bool {
        self.status == ApplicationStatus::Accepted
    }
}

/// True when `user_id` appears among the offer's applicants.
#[must_use]
pub fn has_applied(offer: &Offer, user_id: &str) -> bool {
    offer.has_applicant(user_id)
}

#[derive(Serialize)]
struct ApplyBody<'a> {
    motivacion: &'a str,
}

fn offer_applications_path(offer_id: &str) -> String {
    format!("{OFFERS_ENDPOINT}/{}/postulaciones", segment(offer_id))
}

/// Apply to an offer as the current musician.
///
/// # Errors
///
/// Propagates gateway failures unchanged; the backend rejects duplicates
/// and non-musicians.
pub async fn apply(gateway: &RequestGateway, offer_id: &str, motivation: &str) -> Result<(), ApiError> {
    let request = ApiRequest::post(format!("{OFFERS_ENDPOINT}/{}/postular", segment(offer_id)))
        .json(&ApplyBody { motivacion: motivation })?;
    gateway.execute(request).await?;
    tracing::info!(offer_id, "application submitted");
    Ok(())
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn list_for_offer(gateway: &RequestGateway, offer_id: &str) -> Result<Vec<Application>, ApiError> {
    gateway.get_json(&offer_applications_path(offer_id)).await
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn accept(gateway: &RequestGateway, offer_id: &str, application_id: &str) -> Result<(), ApiError> {
    decide(gateway, offer_id, application_id, "aceptar").await
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn reject(gateway: &RequestGateway, offer_id: &str, application_id: &str) -> Result<(), ApiError> {
    decide(gateway, offer_id, application_id, "rechazar").await
}

async fn decide(gateway: &RequestGateway, offer_id: &str, application_id: &str, verb: &str) -> Result<(), ApiError> {
    let path = format!("{}/{}/{verb}", offer_applications_path(offer_id), segment(application_id));
    gateway.execute(ApiRequest::post(path)).await?;
    tracing::info!(offer_id, application_id, verb, "application decided");
    Ok(())
}

/// Applications submitted by `user_id`, with their offers populated.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn list_for_user(gateway: &RequestGateway, user_id: &str) -> Result<Vec<Application>, ApiError> {
    gateway
        .get_json(&format!("{USER_APPLICATIONS_ENDPOINT}/usuario/{}", segment(user_id)))
        .await
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn withdraw(gateway: &RequestGateway, application_id: &str) -> Result<(), ApiError> {
    gateway
        .delete(&format!("{USER_APPLICATIONS_ENDPOINT}/{}", segment(application_id)))
        .await
}
