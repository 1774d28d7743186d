//! Browser `sessionStorage` slot for the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives for the tab's lifetime, so a reload keeps the user signed
//! in and closing the tab signs them out. Storage failures (private mode,
//! quota, no window during SSR) read as "no token"; a failed write is
//! reported so login does not claim a session it cannot keep.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use escenarte::storage::{StorageError, TOKEN_KEY, TokenStore};

/// Hydrate-only `TokenStore` backed by `window.sessionStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl TokenStore for BrowserSessionStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?
                .get_item(TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = session_storage().ok_or_else(|| StorageError("sessionStorage is not available".to_owned()))?;
            storage
                .set_item(TOKEN_KEY, token)
                .map_err(|e| StorageError(format!("sessionStorage write rejected: {e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError("no browser storage during server rendering".to_owned()))
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
