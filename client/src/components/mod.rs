//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the mirrored session from Leptos context. `guard` wraps
//! every routed screen; `navbar` is rendered once by the app root.

pub mod guard;
pub mod navbar;
