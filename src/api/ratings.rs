//! Ratings a user has received from event counterparts.

#[cfg(test)]
#[path = "ratings_test.rs"]
mod ratings_test;

use serde::{Deserialize, Serialize};

use super::offers::OfferLink;
use super::{PartyRef, segment};
use crate::error::ApiError;
use crate::gateway::RequestGateway;
use crate::types::null_as_default;

pub const RATINGS_ENDPOINT: &str = "/ratings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "calificacion")]
    pub score: u8,
    #[serde(rename = "comentario", default, deserialize_with = "null_as_default")]
    pub comment: String,
    /// Who wrote the rating.
    #[serde(rename = "evaluador", default)]
    pub author: Option<PartyRef>,
    #[serde(rename = "oferta", default)]
    pub offer: Option<OfferLink>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn for_user(gateway: &RequestGateway, user_id: &str) -> Result<Vec<Rating>, ApiError> {
    gateway
        .get_json(&format!("{RATINGS_ENDPOINT}/usuario/{}", segment(user_id)))
        .await
}

/// Mean score rounded to one decimal, or `None` for no ratings.
#[must_use]
pub fn average(ratings: &[Rating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: f64 = ratings.iter().map(|r| f64::from(r.score)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = total / ratings.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Number of filled stars for a mean score.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn filled_stars(mean: f64) -> u8 {
    mean.round().clamp(0.0, 5.0) as u8
}
