// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use super::{BaseAI, BaseChatStore, BaseFallback, ServerDeps};
use crate::common::ChatExchange;
use crate::domains::chat::FallbackTable;

// =============================================================================
// Mock AI
// =============================================================================

pub struct MockAI {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    failure: Option<String>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Mock whose every call fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(reason) = &self.failure {
            anyhow::bail!("Error communicating with Groq API: {}", reason);
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            Ok("Mock AI response".to_string())
        }
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

// =============================================================================
// Mock Fallback
// =============================================================================

/// Delegates to the real FallbackTable while counting calls
pub struct MockFallback {
    table: FallbackTable,
    calls: AtomicUsize,
}

impl MockFallback {
    pub fn new() -> Self {
        Self {
            table: FallbackTable::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseFallback for MockFallback {
    fn reply(&self, input: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.table.reply(input)
    }
}

// =============================================================================
// Mock Chat Store
// =============================================================================

pub struct MockChatStore {
    name: String,
    stored: Arc<Mutex<Vec<ChatExchange>>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl MockChatStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stored: Arc::new(Mutex::new(Vec::new())),
            attempts: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Store whose every write fails
    pub fn failing(name: impl Into<String>) -> Self {
        Self {
            fail: true,
            ..Self::new(name)
        }
    }

    /// Exchanges successfully written
    pub fn stored(&self) -> Vec<ChatExchange> {
        self.stored.lock().unwrap().clone()
    }

    /// Number of store calls, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseChatStore for MockChatStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn store(&self, exchange: &ChatExchange) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            anyhow::bail!("{} unavailable", self.name);
        }

        self.stored.lock().unwrap().push(exchange.clone());
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Handles to the mocks behind a ServerDeps, for assertions after a request
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub fallback: Arc<MockFallback>,
    pub stores: Vec<Arc<MockChatStore>>,
}

impl TestDependencies {
    /// AI that answers with the queued responses, two healthy stores
    pub fn new(ai: MockAI) -> Self {
        Self::with_stores(
            ai,
            vec![
                MockChatStore::new("firestore"),
                MockChatStore::new("realtime_database"),
            ],
        )
    }

    pub fn with_stores(ai: MockAI, stores: Vec<MockChatStore>) -> Self {
        Self {
            ai: Arc::new(ai),
            fallback: Arc::new(MockFallback::new()),
            stores: stores.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.ai.clone(),
            self.fallback.clone(),
            self.stores
                .iter()
                .map(|s| s.clone() as Arc<dyn BaseChatStore>)
                .collect(),
        )
    }

    pub fn store(&self, name: &str) -> &MockChatStore {
        self.stores
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.as_ref())
            .unwrap_or_else(|| panic!("no mock store named {name}"))
    }
}
