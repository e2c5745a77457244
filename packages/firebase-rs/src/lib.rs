// Firebase REST client
//
// Covers the two write paths the chat backend needs: adding Firestore
// documents and pushing Realtime Database children, authorized with a
// service account key.

pub mod auth;
pub mod credentials;
pub mod database;
pub mod error;
pub mod firestore;

pub use auth::{FirebaseAuth, ServiceAccountAuth, FIREBASE_SCOPES};
pub use credentials::ServiceAccountKey;
pub use database::RealtimeDatabase;
pub use error::{FirebaseError, Result};
pub use firestore::{Document, FieldValue, FirestoreClient};

use std::time::Duration;

use reqwest::Client;

/// Upper bound on any single Firebase request, token exchange included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Clients sharing one set of credentials and one request timeout.
#[derive(Clone)]
pub struct FirebaseApp {
    project_id: String,
    auth: FirebaseAuth,
    timeout: Duration,
}

impl FirebaseApp {
    /// Initialize from a service account key file.
    pub fn from_service_account_file(
        path: impl AsRef<std::path::Path>,
        timeout: Duration,
    ) -> Result<Self> {
        let key = ServiceAccountKey::from_file(path)?;
        let project_id = key.project_id.clone();
        Ok(Self {
            project_id,
            auth: FirebaseAuth::service_account(key, timeout)?,
            timeout,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn firestore(&self) -> Result<FirestoreClient> {
        FirestoreClient::new(self.project_id.clone(), self.auth.clone())?.with_timeout(self.timeout)
    }

    pub fn database(&self, database_url: impl Into<String>) -> Result<RealtimeDatabase> {
        RealtimeDatabase::new(database_url, self.auth.clone())?.with_timeout(self.timeout)
    }
}
