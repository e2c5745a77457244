// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The chat flow in domains/chat composes them.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseChatStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::ChatExchange;

// =============================================================================
// AI Trait (primary responder)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a single user prompt (no conversation history).
    ///
    /// Any failure (transport, auth, quota, malformed reply) is an `Err`;
    /// `Ok` always carries genuine model output.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier used for completions
    fn model(&self) -> &str;
}

// =============================================================================
// Fallback Trait (canned replies)
// =============================================================================

pub trait BaseFallback: Send + Sync {
    /// Canned reply for `input`. Total: always produces a reply.
    fn reply(&self, input: &str) -> String;
}

// =============================================================================
// Chat Store Trait (persistence sink)
// =============================================================================

#[async_trait]
pub trait BaseChatStore: Send + Sync {
    /// Short name used in logs and health output
    fn name(&self) -> &str;

    /// Write one exchange to the store.
    async fn store(&self, exchange: &ChatExchange) -> Result<()>;
}
