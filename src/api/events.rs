//! Event history (accepted offers) and post-event ratings.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use super::{PartyRef, segment};
use crate::error::ApiError;
use crate::gateway::{ApiRequest, RequestGateway};
use crate::types::{Role, null_as_default};

pub const EVENTS_ENDPOINT: &str = "/eventos";
pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "titulo", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "fechaEvento", default)]
    pub event_date: Option<String>,
    #[serde(rename = "ubicacion", default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(rename = "genero", default, deserialize_with = "null_as_default")]
    pub genre: String,
    /// Confirmed musicians (organizer view).
    #[serde(rename = "musicos", default, deserialize_with = "null_as_default")]
    pub musicians: Vec<PartyRef>,
    /// Organizer (musician view).
    #[serde(rename = "organizador", alias = "organizer", default)]
    pub organizer: Option<PartyRef>,
    /// Whether the current user already rated this event.
    #[serde(rename = "calificado", default)]
    pub rated: bool,
}

impl Event {
    #[must_use]
    pub fn is_past(&self, now: OffsetDateTime) -> bool {
        self.event_date.as_deref().is_some_and(|d| is_past(d, now))
    }

    /// Musicians rate past events they have not rated yet.
    #[must_use]
    pub fn can_rate(&self, role: &Role, now: OffsetDateTime) -> bool {
        *role == Role::Musician && !self.rated && self.is_past(now)
    }
}

/// True when `event_date` lies strictly before `now`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (read as UTC
/// midnight). Unparseable dates are never past.
#[must_use]
pub fn is_past(event_date: &str, now: OffsetDateTime) -> bool {
    parse_event_date(event_date).is_some_and(|at| at < now)
}

fn parse_event_date(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at);
    }
    time::Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}

/// Split events into `(upcoming, past)` relative to `now`, keeping order.
#[must_use]
pub fn partition(events: &[Event], now: OffsetDateTime) -> (Vec<&Event>, Vec<&Event>) {
    events.iter().partition(|e| !e.is_past(now))
}

fn history_path(role: &Role) -> String {
    let side = if *role == Role::Organizer { "organizador" } else { "musico" };
    format!("{EVENTS_ENDPOINT}/historial/{side}")
}

/// Event history for the current user's side of the marketplace.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn history(gateway: &RequestGateway, role: &Role) -> Result<Vec<Event>, ApiError> {
    gateway.get_json(&history_path(role)).await
}

#[derive(Serialize)]
struct RatingBody<'a> {
    calificacion: u8,
    comentario: &'a str,
}

/// Rate a past event.
///
/// # Errors
///
/// [`ApiError::InvalidInput`] when `score` is outside `1..=5`; otherwise
/// gateway failures unchanged.
pub async fn rate(gateway: &RequestGateway, event_id: &str, score: u8, comment: &str) -> Result<(), ApiError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ApiError::InvalidInput(format!(
            "La calificación debe estar entre {MIN_SCORE} y {MAX_SCORE}"
        )));
    }
    let request = ApiRequest::post(format!("{EVENTS_ENDPOINT}/{}/calificar", segment(event_id)))
        .json(&RatingBody { calificacion: score, comentario: comment.trim() })?;
    gateway.execute(request).await?;
    tracing::info!(event_id, score, "event rated");
    Ok(())
}
