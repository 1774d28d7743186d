//! Networking glue between the browser and the `escenarte` request gateway.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway and domain endpoints live in the core crate. This module only
//! supplies the wire-level `Transport` the gateway runs on.

pub mod transport;
