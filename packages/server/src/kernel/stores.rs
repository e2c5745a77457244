//! Chat store adapters (implement BaseChatStore over the firebase crate)

use anyhow::{Context, Result};
use async_trait::async_trait;
use firebase::{Document, FirestoreClient, RealtimeDatabase};
use serde::Serialize;

use crate::common::ChatExchange;
use crate::kernel::BaseChatStore;

/// Collection (Firestore) and path (Realtime Database) chats are written under.
pub const CHATS: &str = "chats";

// =============================================================================
// Firestore
// =============================================================================

/// Adds one document per exchange to a Firestore collection.
pub struct FirestoreChatStore {
    client: FirestoreClient,
    collection: String,
}

impl FirestoreChatStore {
    pub fn new(client: FirestoreClient) -> Self {
        Self {
            client,
            collection: CHATS.to_string(),
        }
    }

    pub fn document(exchange: &ChatExchange) -> Document {
        Document::new()
            .field("user_input", exchange.user_input.as_str())
            .field("bot_response", exchange.bot_response.as_str())
            .field("timestamp", exchange.timestamp)
    }
}

#[async_trait]
impl BaseChatStore for FirestoreChatStore {
    fn name(&self) -> &str {
        "firestore"
    }

    async fn store(&self, exchange: &ChatExchange) -> Result<()> {
        let name = self
            .client
            .add_document(&self.collection, &Self::document(exchange))
            .await
            .context("Error storing data in Firestore")?;

        tracing::debug!(document = %name, "Chat stored in Firestore");
        Ok(())
    }
}

// =============================================================================
// Realtime Database
// =============================================================================

#[derive(Debug, Serialize)]
pub struct RealtimeRecord<'a> {
    pub user_input: &'a str,
    pub bot_response: &'a str,
    pub timestamp: String,
}

impl<'a> From<&'a ChatExchange> for RealtimeRecord<'a> {
    fn from(exchange: &'a ChatExchange) -> Self {
        Self {
            user_input: &exchange.user_input,
            bot_response: &exchange.bot_response,
            timestamp: exchange.timestamp_iso8601(),
        }
    }
}

/// Pushes one child per exchange under a Realtime Database path.
pub struct RealtimeChatStore {
    database: RealtimeDatabase,
    path: String,
}

impl RealtimeChatStore {
    pub fn new(database: RealtimeDatabase) -> Self {
        Self {
            database,
            path: CHATS.to_string(),
        }
    }
}

#[async_trait]
impl BaseChatStore for RealtimeChatStore {
    fn name(&self) -> &str {
        "realtime_database"
    }

    async fn store(&self, exchange: &ChatExchange) -> Result<()> {
        let key = self
            .database
            .push(&self.path, &RealtimeRecord::from(exchange))
            .await
            .context("Error storing data in Realtime Database")?;

        tracing::debug!(key = %key, "Chat stored in Realtime Database");
        Ok(())
    }
}
