use thiserror::Error;

pub type Result<T> = std::result::Result<T, FirebaseError>;

#[derive(Debug, Error)]
pub enum FirebaseError {
    /// Service account file missing or malformed
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Token signing or exchange failed
    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from a Firebase endpoint
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FirebaseError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FirebaseError::Parse(e.to_string())
        } else {
            FirebaseError::Network(e.to_string())
        }
    }
}

/// Turn a non-success response into `FirebaseError::Api`, passing successes through.
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(FirebaseError::Api {
        status: status.as_u16(),
        body,
    })
}
