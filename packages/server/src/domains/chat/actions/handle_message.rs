//! Handle message action - the full request flow for one chat message

use tracing::info;

use crate::common::ChatExchange;
use crate::domains::chat::actions::{persist_exchange, resolve_reply};
use crate::domains::chat::{ChatError, ChatReply};
use crate::kernel::ServerDeps;

/// Answer a chat message and record the exchange.
///
/// 1. Rejects a missing or empty message (nothing else runs)
/// 2. Resolves the reply (AI, else fallback)
/// 3. Writes the exchange to every store
///
/// Store failures never change the reply.
pub async fn handle_message(
    message: Option<String>,
    deps: &ServerDeps,
) -> Result<ChatReply, ChatError> {
    let input = match message {
        Some(m) if !m.is_empty() => m,
        _ => return Err(ChatError::NoMessage),
    };

    let reply = resolve_reply(&input, deps).await;

    let exchange = ChatExchange::new(input, reply.text);
    let persisted = persist_exchange(&exchange, deps).await;

    info!(
        source = ?reply.source,
        stored = persisted.iter().filter(|o| o.stored).count(),
        stores = persisted.len(),
        "Chat message handled"
    );

    Ok(ChatReply {
        text: exchange.bot_response,
        source: reply.source,
        persisted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::chat::ReplySource;
    use crate::kernel::test_dependencies::{MockAI, MockChatStore};
    use crate::kernel::TestDependencies;

    #[tokio::test]
    async fn primary_reply_skips_fallback() {
        let test_deps = TestDependencies::new(MockAI::new().with_response("Paris."));

        let reply = handle_message(Some("Capital of France?".into()), &test_deps.server_deps())
            .await
            .unwrap();

        assert_eq!(reply.text, "Paris.");
        assert_eq!(reply.source, ReplySource::Primary);
        assert_eq!(test_deps.ai.calls(), vec!["Capital of France?".to_string()]);
        assert_eq!(test_deps.fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn primary_output_containing_error_is_not_treated_as_failure() {
        let test_deps = TestDependencies::new(
            MockAI::new().with_response("Error handling in Rust uses Result."),
        );

        let reply = handle_message(Some("hello".into()), &test_deps.server_deps())
            .await
            .unwrap();

        assert_eq!(reply.text, "Error handling in Rust uses Result.");
        assert_eq!(test_deps.fallback.call_count(), 0);
    }

    #[tokio::test]
    async fn failed_primary_uses_fallback() {
        let test_deps = TestDependencies::new(MockAI::failing("connection refused"));

        let reply = handle_message(Some("HELLO".into()), &test_deps.server_deps())
            .await
            .unwrap();

        assert_eq!(reply.text, "Hi there! How can I assist you today?");
        assert_eq!(reply.source, ReplySource::Fallback);
        assert_eq!(test_deps.fallback.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_or_empty_message_is_rejected_before_anything_runs() {
        let test_deps = TestDependencies::new(MockAI::new());
        let deps = test_deps.server_deps();

        assert_eq!(handle_message(None, &deps).await, Err(ChatError::NoMessage));
        assert_eq!(
            handle_message(Some(String::new()), &deps).await,
            Err(ChatError::NoMessage)
        );

        assert_eq!(test_deps.ai.call_count(), 0);
        assert!(test_deps.stores.iter().all(|s| s.attempts() == 0));
    }

    #[tokio::test]
    async fn every_store_receives_the_exchange() {
        let test_deps = TestDependencies::new(MockAI::failing("quota exceeded"));

        let reply = handle_message(Some("bye".into()), &test_deps.server_deps())
            .await
            .unwrap();

        for store in &test_deps.stores {
            let stored = store.stored();
            assert_eq!(stored.len(), 1);
            assert_eq!(stored[0].user_input, "bye");
            assert_eq!(stored[0].bot_response, "Goodbye! Have a great day!");
        }
        assert!(reply.persisted.iter().all(|o| o.stored));
    }

    #[tokio::test]
    async fn stores_share_one_timestamp() {
        let test_deps = TestDependencies::new(MockAI::new());

        handle_message(Some("hi".into()), &test_deps.server_deps())
            .await
            .unwrap();

        let first = test_deps.stores[0].stored()[0].timestamp;
        let second = test_deps.stores[1].stored()[0].timestamp;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn failing_store_does_not_block_the_other() {
        let test_deps = TestDependencies::with_stores(
            MockAI::new().with_response("ok"),
            vec![
                MockChatStore::failing("firestore"),
                MockChatStore::new("realtime_database"),
            ],
        );

        let reply = handle_message(Some("hi".into()), &test_deps.server_deps())
            .await
            .unwrap();

        assert_eq!(reply.text, "ok");
        assert_eq!(test_deps.store("firestore").attempts(), 1);
        assert_eq!(test_deps.store("realtime_database").stored().len(), 1);
        assert_eq!(
            reply.persisted,
            vec![
                crate::domains::chat::StoreOutcome {
                    store: "firestore".into(),
                    stored: false
                },
                crate::domains::chat::StoreOutcome {
                    store: "realtime_database".into(),
                    stored: true
                },
            ]
        );
    }
}
