//! OAuth2 access tokens for the Firebase REST APIs.
//!
//! Service accounts use the JWT bearer grant: a short-lived assertion signed
//! with the account's RSA key is exchanged at the token endpoint for an access
//! token, which is cached until shortly before it expires.

use std::{
    sync::Arc,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::credentials::ServiceAccountKey;
use crate::error::{check_status, FirebaseError, Result};

/// Scopes covering Firestore and the Realtime Database.
pub const FIREBASE_SCOPES: &str = "https://www.googleapis.com/auth/datastore \
https://www.googleapis.com/auth/firebase.database \
https://www.googleapis.com/auth/userinfo.email";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// How requests to Firebase are authorized.
#[derive(Clone)]
pub enum FirebaseAuth {
    ServiceAccount(Arc<ServiceAccountAuth>),
    /// A pre-issued OAuth2 access token
    Bearer(String),
    /// No credentials (emulators, open security rules)
    Anonymous,
}

impl FirebaseAuth {
    pub fn service_account(key: ServiceAccountKey, timeout: Duration) -> Result<Self> {
        Ok(Self::ServiceAccount(Arc::new(ServiceAccountAuth::new(
            key, timeout,
        )?)))
    }

    /// Token to send as `Authorization: Bearer`, if any.
    pub async fn bearer_token(&self) -> Result<Option<String>> {
        match self {
            Self::ServiceAccount(auth) => auth.access_token().await.map(Some),
            Self::Bearer(token) => Ok(Some(token.clone())),
            Self::Anonymous => Ok(None),
        }
    }

    /// Attach credentials to an outgoing request.
    pub(crate) async fn authorize(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder> {
        Ok(match self.bearer_token().await? {
            Some(token) => request.bearer_auth(token),
            None => request,
        })
    }
}

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

pub struct ServiceAccountAuth {
    key: ServiceAccountKey,
    encoding_key: EncodingKey,
    http_client: Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    /// `timeout` bounds each token exchange, which runs while the cache lock is held.
    pub fn new(key: ServiceAccountKey, timeout: Duration) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| FirebaseError::Credentials(format!("invalid private key: {e}")))?;

        Ok(Self {
            key,
            encoding_key,
            http_client: crate::http_client(timeout)?,
            cached: Mutex::new(None),
        })
    }

    pub fn project_id(&self) -> &str {
        &self.key.project_id
    }

    /// Signed JWT assertion for the token exchange, issued at `issued_at` (unix seconds).
    pub fn signed_assertion(&self, issued_at: u64) -> Result<String> {
        let mut header = Header::new(Algorithm::RS256);
        header.kid = Some(self.key.private_key_id.clone());

        let claims = Claims {
            iss: &self.key.client_email,
            scope: FIREBASE_SCOPES,
            aud: &self.key.token_uri,
            iat: issued_at,
            exp: issued_at + ASSERTION_LIFETIME_SECS,
        };

        encode(&header, &claims, &self.encoding_key).map_err(|e| FirebaseError::Auth(e.to_string()))
    }

    /// Current access token, exchanging a fresh assertion when the cached one is near expiry.
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.expires_at > Instant::now() + REFRESH_MARGIN {
                return Ok(token.access_token.clone());
            }
        }

        let fresh = self.fetch_token().await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);

        Ok(access_token)
    }

    async fn fetch_token(&self) -> Result<CachedToken> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| FirebaseError::Auth(e.to_string()))?
            .as_secs();
        let assertion = self.signed_assertion(now)?;

        let response = self
            .http_client
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let token: TokenResponse = check_status(response)
            .await
            .map_err(|e| FirebaseError::Auth(e.to_string()))?
            .json()
            .await
            .map_err(|e| FirebaseError::Parse(e.to_string()))?;

        debug!(
            client_email = %self.key.client_email,
            expires_in = token.expires_in,
            "Obtained Firebase access token"
        );

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }
}
