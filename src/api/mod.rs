//! Typed domain endpoints over the [`RequestGateway`](crate::RequestGateway).
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule is a set of free async functions taking the gateway by
//! reference. None of them read or write session state; the bearer token is
//! attached by the gateway alone. Path segments built from ids are
//! URL-encoded here.
//!
//! The backend populates references inconsistently: the same field may hold
//! a bare id string or an embedded document. [`PartyRef`] absorbs both.

pub mod applications;
pub mod events;
pub mod messages;
pub mod offers;
pub mod payments;
pub mod ratings;
pub mod users;


use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Role, null_as_default};

/// A user referenced from another document, either by id or populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "PartyWire")]
pub struct PartyRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Raw embedded profile, when the backend populated one.
    #[serde(skip_serializing_if = "Value::is_null")]
    pub profile: Value,
}

impl PartyRef {
    /// Display name, falling back to `fallback` when the reference was not populated.
    #[must_use]
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(fallback)
    }

    /// A string field of the embedded profile, if present and non-empty.
    #[must_use]
    pub fn profile_field(&self, key: &str) -> Option<&str> {
        self.profile.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PartyWire {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        role: Option<Role>,
        #[serde(default, deserialize_with = "null_as_default")]
        profile: Value,
    },
}

impl From<PartyWire> for PartyRef {
    fn from(wire: PartyWire) -> Self {
        match wire {
            PartyWire::Id(id) => Self { id, ..Self::default() },
            PartyWire::Populated { id, name, role, profile } => Self { id, name, role, profile },
        }
    }
}

/// A document referenced by id or embedded. Only the id is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IdWire")]
pub struct IdRef(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdWire {
    Id(String),
    Populated {
        #[serde(rename = "_id", alias = "id")]
        id: String,
    },
}

impl From<IdWire> for IdRef {
    fn from(wire: IdWire) -> Self {
        match wire {
            IdWire::Id(id) | IdWire::Populated { id } => Self(id),
        }
    }
}

pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
