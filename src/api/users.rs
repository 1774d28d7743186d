//! Public user records and own-profile edits.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde::Serialize;
use serde_json::Value;

use super::segment;
use crate::error::ApiError;
use crate::gateway::RequestGateway;
use crate::types::{Multimedia, Profile, User};

pub const USERS_ENDPOINT: &str = "/users";

/// Partial profile update. Only fields that changed are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multimedia: Option<Multimedia>,
}

impl ProfileUpdate {
    /// Fields of `edited` that differ from `original`.
    #[must_use]
    pub fn diff(original: &User, edited: &User) -> Self {
        Self {
            name: (original.name != edited.name).then(|| edited.name.trim().to_owned()),
            profile: (original.profile != edited.profile).then(|| edited.profile.clone()),
            multimedia: (original.multimedia != edited.multimedia).then(|| edited.multimedia.clone()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.profile.is_none() && self.multimedia.is_none()
    }
}

/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn get(gateway: &RequestGateway, user_id: &str) -> Result<User, ApiError> {
    gateway
        .get_json(&format!("{USERS_ENDPOINT}/{}", segment(user_id)))
        .await
}

/// Save changes to the current user's profile. Returns the backend's
/// confirmation message, if it sent one.
///
/// # Errors
///
/// [`ApiError::InvalidInput`] when there is nothing to send; otherwise
/// gateway failures unchanged.
pub async fn update_profile(gateway: &RequestGateway, update: &ProfileUpdate) -> Result<Option<String>, ApiError> {
    if update.is_empty() {
        return Err(ApiError::InvalidInput("No se detectaron cambios para actualizar".to_owned()));
    }
    let body: Value = gateway
        .put_json(&format!("{USERS_ENDPOINT}/profile"), update)
        .await?;
    tracing::info!(
        name = update.name.is_some(),
        profile = update.profile.is_some(),
        multimedia = update.multimedia.is_some(),
        "profile updated"
    );
    Ok(body.get("msg").and_then(Value::as_str).map(str::to_owned))
}
