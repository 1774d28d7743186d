//! Reactive client state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` mirrors the core session; `app` owns the wiring that builds the
//! session store and provides both to the component tree.

pub mod app;
pub mod auth;
