//! Persisted token slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one value is persisted client-side: the bearer token. The session
//! store is the only writer; the request gateway reads the same slot on every
//! request, so a cleared token is never attached afterwards.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Mutex, PoisonError};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// The backend refused to persist the token (private mode, quota, no storage).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("token storage unavailable: {0}")]
pub struct StorageError(pub String);

/// A single-slot token persistence backend.
///
/// Implementations must make a `save`/`clear` visible to the next `load`.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the token could not be written. The slot
    /// must then be left as it was.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    fn clear(&self);
}

/// In-process token slot. Survives nothing beyond the process; used by tests
/// and native embedders.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token, as if persisted by a previous page life.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
