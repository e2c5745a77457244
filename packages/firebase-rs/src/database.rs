//! Realtime Database REST writes.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::FirebaseAuth;
use crate::error::{check_status, Result};

#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

#[derive(Clone)]
pub struct RealtimeDatabase {
    http_client: Client,
    auth: FirebaseAuth,
    database_url: String,
}

impl RealtimeDatabase {
    /// `database_url` is the instance root, e.g. `https://<project>.firebaseio.com`.
    pub fn new(database_url: impl Into<String>, auth: FirebaseAuth) -> Result<Self> {
        Ok(Self {
            http_client: crate::http_client(crate::DEFAULT_TIMEOUT)?,
            auth,
            database_url: database_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = crate::http_client(timeout)?;
        Ok(self)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    fn node_url(&self, path: &str) -> String {
        format!("{}/{}.json", self.database_url, path.trim_matches('/'))
    }

    /// Append `value` as a new child of `path`.
    ///
    /// The database generates a chronologically ordered key, which is returned.
    pub async fn push<T: Serialize + ?Sized>(&self, path: &str, value: &T) -> Result<String> {
        let request = self
            .auth
            .authorize(self.http_client.post(self.node_url(path)))
            .await?;
        let response = check_status(request.json(value).send().await?).await?;
        let pushed: PushResponse = response.json().await?;

        debug!(path, key = %pushed.name, "Realtime Database child pushed");

        Ok(pushed.name)
    }
}
