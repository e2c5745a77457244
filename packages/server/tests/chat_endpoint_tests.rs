//! Integration tests for `POST /chat`.
//!
//! Covers:
//! - Validation of the message field
//! - AI reply passthrough and fallback on AI failure
//! - Writes to every store, including when one store fails

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chatbot_core::kernel::test_dependencies::{MockAI, MockChatStore};
use common::TestHarness;
use serde_json::json;

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn missing_message_is_bad_request() {
    let harness = TestHarness::new(MockAI::new());

    let (status, body) = harness.post_chat("{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No message provided"}));
    assert_eq!(harness.deps.ai.call_count(), 0);
    assert!(harness.deps.stores.iter().all(|s| s.attempts() == 0));
}

#[tokio::test]
async fn empty_and_null_messages_are_bad_requests() {
    let harness = TestHarness::new(MockAI::new());

    for body in [r#"{"message": ""}"#, r#"{"message": null}"#] {
        let (status, response) = harness.post_chat(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response, json!({"error": "No message provided"}));
    }

    assert!(harness.deps.stores.iter().all(|s| s.attempts() == 0));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let harness = TestHarness::new(MockAI::new());

    let (status, body) = harness.post_chat("{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
    assert_eq!(harness.deps.ai.call_count(), 0);
}

#[tokio::test]
async fn non_string_message_is_bad_request() {
    let harness = TestHarness::new(MockAI::new());

    let (status, body) = harness.post_chat(r#"{"message": 42}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let harness = TestHarness::new(MockAI::new());
    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .body(Body::from(r#"{"message": "hello"}"#))
        .unwrap();

    let (status, _, _) = harness.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(harness.deps.ai.call_count(), 0);
}

// ============================================================================
// Reply resolution
// ============================================================================

#[tokio::test]
async fn ai_reply_is_returned_verbatim() {
    let harness = TestHarness::new(MockAI::new().with_response("Rust is a systems language."));

    let (status, body) = harness.post_chat(r#"{"message": "What is Rust?"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Rust is a systems language."}));
    assert_eq!(harness.deps.ai.calls(), vec!["What is Rust?".to_string()]);
    assert_eq!(harness.deps.fallback.call_count(), 0);
}

#[tokio::test]
async fn failing_ai_falls_back_and_persists_once_per_store() {
    let harness = TestHarness::new(MockAI::failing("401 Invalid API Key"));

    let (status, body) = harness.post_chat(r#"{"message": "bye"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Goodbye! Have a great day!"}));
    assert_eq!(harness.deps.fallback.call_count(), 1);

    for store in &harness.deps.stores {
        assert_eq!(store.attempts(), 1);
        let stored = store.stored();
        assert_eq!(stored[0].user_input, "bye");
        assert_eq!(stored[0].bot_response, "Goodbye! Have a great day!");
    }
}

#[tokio::test]
async fn unknown_phrase_with_failing_ai_gets_default_reply() {
    let harness = TestHarness::new(MockAI::failing("timeout"));

    let (_, body) = harness.post_chat(r#"{"message": "xyz-unrecognized"}"#).await;

    assert_eq!(
        body["response"],
        "I'm not sure how to respond to that. Can you try rephrasing?"
    );
}

// ============================================================================
// Persistence
// ============================================================================

#[tokio::test]
async fn failing_store_does_not_affect_response_or_other_store() {
    let harness = TestHarness::with_stores(
        MockAI::new().with_response("Hello!"),
        vec![
            MockChatStore::new("firestore"),
            MockChatStore::failing("realtime_database"),
        ],
    );

    let (status, body) = harness.post_chat(r#"{"message": "hi"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Hello!"}));
    assert_eq!(harness.deps.store("firestore").stored().len(), 1);
    assert_eq!(harness.deps.store("realtime_database").attempts(), 1);
    assert!(harness.deps.store("realtime_database").stored().is_empty());
}

#[tokio::test]
async fn all_stores_failing_still_returns_reply() {
    let harness = TestHarness::with_stores(
        MockAI::failing("offline"),
        vec![
            MockChatStore::failing("firestore"),
            MockChatStore::failing("realtime_database"),
        ],
    );

    let (status, body) = harness.post_chat(r#"{"message": "Hello"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Hi there! How can I assist you today?"}));
    assert!(harness.deps.stores.iter().all(|s| s.attempts() == 1));
}

#[tokio::test]
async fn single_store_configuration_writes_once() {
    let harness = TestHarness::with_stores(
        MockAI::new().with_response("Sure."),
        vec![MockChatStore::new("firestore")],
    );

    let (status, _) = harness.post_chat(r#"{"message": "help"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(harness.deps.store("firestore").stored().len(), 1);
}
