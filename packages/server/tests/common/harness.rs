//! Test harness that drives the real router with mock dependencies.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, HeaderMap, Request, StatusCode},
    Router,
};
use chatbot_core::kernel::test_dependencies::{MockAI, MockChatStore};
use chatbot_core::kernel::TestDependencies;
use chatbot_core::server::build_app;
use serde_json::Value;
use tower::ServiceExt;

/// Test harness that owns the router and handles to its mocks.
///
/// # Example
///
/// ```ignore
/// let harness = TestHarness::new(MockAI::failing("offline"));
/// let (status, body) = harness.post_chat(r#"{"message": "bye"}"#).await;
/// assert_eq!(harness.deps.store("firestore").attempts(), 1);
/// ```
pub struct TestHarness {
    pub deps: TestDependencies,
    app: Router,
}

impl TestHarness {
    /// Two healthy stores: "firestore" and "realtime_database"
    pub fn new(ai: MockAI) -> Self {
        Self::from_deps(TestDependencies::new(ai))
    }

    pub fn with_stores(ai: MockAI, stores: Vec<MockChatStore>) -> Self {
        Self::from_deps(TestDependencies::with_stores(ai, stores))
    }

    fn from_deps(deps: TestDependencies) -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let app = build_app(deps.server_deps());
        Self { deps, app }
    }

    /// POST a raw JSON body to `/chat` and decode the JSON response.
    pub async fn post_chat(&self, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, _, bytes) = self.send(request).await;
        let json = serde_json::from_slice(&bytes).expect("response body should be JSON");
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, headers, bytes.to_vec())
    }
}
