//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, polling, form state)
//! and is mounted by `app` behind the guard its screen requires.

pub mod dashboard;
pub mod inbox;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod offers;
pub mod placeholder;
pub mod register;
