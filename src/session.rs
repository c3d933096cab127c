//! Authenticated-session flag handed to the form controllers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Capability to mark the browsing session as authenticated.
///
/// Controllers receive this at construction and only ever set the flag.
pub trait SessionContext {
    fn mark_authenticated(&self);
}

/// Shared session flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct Session {
    authenticated: Arc<AtomicBool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Acquire)
    }
}

impl SessionContext for Session {
    fn mark_authenticated(&self) {
        self.authenticated.store(true, Ordering::Release);
    }
}
