//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use firebase::FirebaseApp;
use groq_client::GroqClient;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::chat::FallbackTable;
use crate::kernel::{BaseChatStore, FirestoreChatStore, GroqAI, RealtimeChatStore, ServerDeps};
use crate::server::routes::{chat_handler, health_handler};
use crate::server::static_files::serve_home;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the production dependencies from configuration.
///
/// Firestore is always registered; the Realtime Database store is added
/// only when a database URL is configured.
pub fn build_server_deps(config: &Config) -> Result<ServerDeps> {
    let mut groq = GroqClient::new(config.groq_api_key.clone())
        .and_then(|client| client.with_timeout(config.groq_timeout))
        .context("Failed to create Groq client")?;
    if let Some(base_url) = &config.groq_base_url {
        groq = groq.with_base_url(base_url.clone());
    }
    let ai = Arc::new(GroqAI::new(groq, config.groq_model.clone()));

    let firebase = FirebaseApp::from_service_account_file(
        &config.firebase_credentials_path,
        config.firebase_timeout,
    )
    .with_context(|| {
        format!(
            "Failed to load Firebase credentials from {}",
            config.firebase_credentials_path
        )
    })?;
    tracing::info!(project_id = firebase.project_id(), "Firebase credentials loaded");

    let firestore = firebase
        .firestore()
        .context("Failed to create Firestore client")?;
    let mut stores: Vec<Arc<dyn BaseChatStore>> =
        vec![Arc::new(FirestoreChatStore::new(firestore))];

    match &config.firebase_database_url {
        Some(url) => {
            let database = firebase
                .database(url.clone())
                .context("Failed to create Realtime Database client")?;
            stores.push(Arc::new(RealtimeChatStore::new(database)));
        }
        None => tracing::info!("FIREBASE_DATABASE_URL not set, Realtime Database store disabled"),
    }

    Ok(ServerDeps::new(ai, Arc::new(FallbackTable::new()), stores))
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    tracing::info!(stores = ?deps.store_names(), model = deps.ai.model(), "Building router");

    let app_state = AppState {
        deps: Arc::new(deps),
    };

    // The chat page may be served from another origin in development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(serve_home))
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
