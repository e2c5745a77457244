//! Tests for building production dependencies from configuration.

use std::time::Duration;

use chatbot_core::server::build_server_deps;
use chatbot_core::Config;

const SERVICE_ACCOUNT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../firebase-rs/tests/fixtures/service_account.json"
);

fn config(database_url: Option<&str>) -> Config {
    Config {
        port: 5005,
        groq_api_key: "gsk-test".to_string(),
        groq_model: "llama3-8b-8192".to_string(),
        groq_base_url: None,
        groq_timeout: Duration::from_secs(60),
        firebase_credentials_path: SERVICE_ACCOUNT.to_string(),
        firebase_database_url: database_url.map(str::to_string),
        firebase_timeout: Duration::from_secs(30),
    }
}

#[test]
fn firestore_only_without_database_url() {
    let deps = build_server_deps(&config(None)).unwrap();

    assert_eq!(deps.store_names(), vec!["firestore"]);
    assert_eq!(deps.ai.model(), "llama3-8b-8192");
}

#[test]
fn realtime_store_registered_with_database_url() {
    let deps = build_server_deps(&config(Some("https://chatbot-test.firebaseio.com"))).unwrap();

    assert_eq!(deps.store_names(), vec!["firestore", "realtime_database"]);
}

#[test]
fn missing_credentials_file_fails_with_context() {
    let mut config = config(None);
    config.firebase_credentials_path = "/nonexistent/serviceAccountKey.json".to_string();

    let err = build_server_deps(&config).err().expect("should fail");

    assert!(err
        .to_string()
        .contains("Failed to load Firebase credentials from /nonexistent/serviceAccountKey.json"));
}
