//! Mount-bound cancellation for screen-level requests.
//!
//! A screen creates one [`MountScope`] when it mounts, wraps every request it
//! issues in [`MountScope::run`], and calls [`MountScope::unmount`] from its
//! cleanup hook. Responses that land after unmount are dropped instead of
//! being written into state nobody is looking at anymore.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "still mounted" flag. Clones observe the same flag.
#[derive(Debug, Clone)]
pub struct MountScope {
    alive: Arc<AtomicBool>,
}

impl Default for MountScope {
    fn default() -> Self {
        Self::new()
    }
}

impl MountScope {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Await `future`, yielding its output only if the scope is still mounted
    /// when it completes.
    pub async fn run<F: Future>(&self, future: F) -> Option<F::Output> {
        let output = future.await;
        if self.is_mounted() {
            Some(output)
        } else {
            tracing::debug!("response arrived after unmount; dropped");
            None
        }
    }
}
