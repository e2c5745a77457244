//! Server dependencies for the chat flow (using traits for testability)
//!
//! This module provides the central dependency container used by the chat
//! actions. All external services use trait abstractions to enable testing.
//! The entry point builds the concrete clients and owns their lifecycle.

use std::sync::Arc;

use crate::kernel::{BaseAI, BaseChatStore, BaseFallback};

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Primary responder
    pub ai: Arc<dyn BaseAI>,
    /// Canned replies used when the AI call fails
    pub fallback: Arc<dyn BaseFallback>,
    /// Every store an exchange is written to, in registration order
    pub stores: Vec<Arc<dyn BaseChatStore>>,
}

impl ServerDeps {
    /// Create new ServerDeps with the given dependencies
    pub fn new(
        ai: Arc<dyn BaseAI>,
        fallback: Arc<dyn BaseFallback>,
        stores: Vec<Arc<dyn BaseChatStore>>,
    ) -> Self {
        Self {
            ai,
            fallback,
            stores,
        }
    }

    pub fn store_names(&self) -> Vec<String> {
        self.stores.iter().map(|s| s.name().to_string()).collect()
    }
}
