//! # escenarte
//!
//! Client core for the EscenArte marketplace that connects musicians with
//! event organizers. This crate owns the parts of the front end that carry
//! real invariants: the session store, the authenticated request gateway and
//! the route guard. The typed domain API (offers, applications, messaging,
//! events, ratings, payments) is layered on top of the gateway.
//!
//! The crate is framework-neutral and builds for native targets and
//! `wasm32`. The Leptos front end in `client/` wires it into reactive context
//! and supplies the browser transport and storage.

pub mod api;
pub mod config;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod routes;
pub mod scope;
pub mod session;
pub mod storage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::ClientConfig;
pub use error::{ApiError, ErrorCode};
pub use gateway::RequestGateway;
pub use guard::GuardDecision;
pub use session::{SessionSnapshot, SessionStore};
pub use types::{Role, User};
