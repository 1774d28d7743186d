//! Identity and authentication DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend returns one loosely shaped user record whose `profile` fields
//! depend on the role. Here the profile is a tagged [`Profile`] resolved from
//! the sibling `role` field at decode time, so screens read role-specific
//! fields without defensive lookups. The role string itself is preserved
//! verbatim: `Role::Unrecognized` keeps whatever the backend sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::ApiError;

pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// ROLE
// =============================================================================

/// Account role. Canonical wire spellings are `"musician"` and `"organizer"`.
///
/// Legacy spellings (`"musico"`, `"organizador"`) are not aliased; they decode
/// as [`Role::Unrecognized`] and never satisfy a role requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Musician,
    Organizer,
    Unrecognized(String),
}

impl Role {
    pub const MUSICIAN: &'static str = "musician";
    pub const ORGANIZER: &'static str = "organizer";

    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            Self::MUSICIAN => Self::Musician,
            Self::ORGANIZER => Self::Organizer,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// The exact wire string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Musician => Self::MUSICIAN,
            Self::Organizer => Self::ORGANIZER,
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Display label used across screens.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Musician => "Músico",
            Self::Organizer => "Organizador",
            Self::Unrecognized(_) => "Usuario",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Unrecognized(String::new())
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::from_wire(&raw))
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// Role-specific profile data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Profile {
    Musician(MusicianProfile),
    Organizer(OrganizerProfile),
    /// Profile of a user whose role is not recognized, kept as received.
    Unrecognized(Value),
}

impl Profile {
    /// An empty profile of the shape `role` expects.
    #[must_use]
    pub fn empty_for(role: &Role) -> Self {
        match role {
            Role::Musician => Self::Musician(MusicianProfile::default()),
            Role::Organizer => Self::Organizer(OrganizerProfile::default()),
            Role::Unrecognized(_) => Self::Unrecognized(Value::Null),
        }
    }

    /// Decode a raw profile value according to `role`.
    ///
    /// The profile is backend-owned, so a shape the typed decode cannot read
    /// is kept verbatim as [`Profile::Unrecognized`] rather than rejected.
    #[must_use]
    pub fn from_value(role: &Role, value: Value) -> Self {
        if value.is_null() {
            return Self::empty_for(role);
        }
        let typed = match role {
            Role::Musician => serde_json::from_value(value.clone()).map(Self::Musician),
            Role::Organizer => serde_json::from_value(value.clone()).map(Self::Organizer),
            Role::Unrecognized(_) => return Self::Unrecognized(value),
        };
        typed.unwrap_or_else(|e| {
            tracing::warn!(role = %role, error = %e, "profile kept as received");
            Self::Unrecognized(value)
        })
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        let bio = match self {
            Self::Musician(p) => p.bio.as_str(),
            Self::Organizer(p) => p.bio.as_str(),
            Self::Unrecognized(v) => v.get("bio").and_then(Value::as_str).unwrap_or_default(),
        };
        Some(bio).filter(|b| !b.is_empty())
    }

    #[must_use]
    pub fn as_musician(&self) -> Option<&MusicianProfile> {
        match self {
            Self::Musician(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_organizer(&self) -> Option<&OrganizerProfile> {
        match self {
            Self::Organizer(p) => Some(p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicianProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub instruments: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub experience: String,
    /// Asking fee per event.
    #[serde(rename = "tarifa", skip_serializing_if = "Option::is_none")]
    pub rate: Option<Rate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    #[serde(rename = "monto", deserialize_with = "deserialize_lenient_f64")]
    pub amount: f64,
    #[serde(rename = "moneda", default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizerProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub venue_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub venue_type: String,
    /// Venue capacity. The registration form historically sent this as a string,
    /// sometimes fractional; unreadable values are treated as unknown.
    #[serde(deserialize_with = "deserialize_lenient_capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub event_types: Vec<String>,
}

// =============================================================================
// MULTIMEDIA
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Multimedia {
    #[serde(rename = "profilePhoto", skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    #[serde(rename = "fotos", deserialize_with = "null_as_default")]
    pub photos: Vec<MediaItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub audio: Vec<MediaItem>,
}

/// A gallery photo or audio track. The backend sends either a bare URL or an
/// object with a `url` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MediaWire")]
pub struct MediaItem {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MediaWire {
    Url(String),
    Object {
        url: String,
        #[serde(default, alias = "titulo")]
        title: Option<String>,
    },
}

impl From<MediaWire> for MediaItem {
    fn from(wire: MediaWire) -> Self {
        match wire {
            MediaWire::Url(url) => Self { url, title: None },
            MediaWire::Object { url, title } => Self { url, title },
        }
    }
}

// =============================================================================
// USER
// =============================================================================

/// The resolved identity returned by the "who am I" and login endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserWire")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub profile: Profile,
    pub multimedia: Multimedia,
}

#[derive(Deserialize)]
struct UserWire {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    email: String,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    profile: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    multimedia: Multimedia,
}

impl From<UserWire> for User {
    fn from(wire: UserWire) -> Self {
        let profile = Profile::from_value(&wire.role, wire.profile);
        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            role: wire.role,
            profile,
            multimedia: wire.multimedia,
        }
    }
}

impl User {
    #[must_use]
    pub fn is_musician(&self) -> bool {
        self.role == Role::Musician
    }

    #[must_use]
    pub fn is_organizer(&self) -> bool {
        self.role == Role::Organizer
    }
}

// =============================================================================
// AUTH PAYLOADS
// =============================================================================

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.trim().to_owned(), password: password.to_owned() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful credential exchange.
#[derive(Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// Full registration payload: identity, role and role-specific profile.
#[derive(Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profile: Profile,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

impl Registration {
    /// A registration with an empty profile shaped for `role`.
    #[must_use]
    pub fn new(name: &str, email: &str, password: &str, role: Role) -> Self {
        let profile = Profile::empty_for(&role);
        Self { name: name.trim().to_owned(), email: email.trim().to_owned(), password: password.to_owned(), role, profile }
    }

    /// Check the identity step of the registration form.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] with the message shown to the user.
    pub fn validate(&self, confirm_password: &str) -> Result<(), ApiError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() || confirm_password.is_empty() {
            return Err(ApiError::InvalidInput("Todos los campos son obligatorios".to_owned()));
        }
        if self.password != confirm_password {
            return Err(ApiError::InvalidInput("Las contraseñas no coinciden".to_owned()));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::InvalidInput(format!(
                "La contraseña debe tener al menos {MIN_PASSWORD_LEN} caracteres"
            )));
        }
        if matches!(self.role, Role::Unrecognized(_)) {
            return Err(ApiError::InvalidInput("Selecciona un tipo de cuenta".to_owned()));
        }
        Ok(())
    }
}

// =============================================================================
// SERDE HELPERS
// =============================================================================

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_lenient_capacity<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let capacity = number
        .filter(|n| n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n.trunc() as u32);
    Ok(capacity)
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().ok_or_else(|| D::Error::custom(format!("expected a finite number, got {n}"))),
        Value::String(s) => s
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got '{s}'"))),
        other => Err(D::Error::custom(format!("expected number or string, got {other}"))),
    }
}
