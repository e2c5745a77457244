use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::{env, time::Duration};

use groq_client::LLAMA3_8B;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_base_url: Option<String>,
    /// Bound on one completion request; on expiry the fallback answers
    pub groq_timeout: Duration,
    pub firebase_credentials_path: String,
    /// Realtime Database root; the realtime store is only registered when set
    pub firebase_database_url: Option<String>,
    /// Bound on each Firebase request, so a stalled store cannot hold up the reply
    pub firebase_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "5005".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            groq_api_key: env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?,
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| LLAMA3_8B.to_string()),
            groq_base_url: non_empty_var("GROQ_BASE_URL"),
            groq_timeout: timeout_var("GROQ_TIMEOUT_SECS", 60)?,
            firebase_credentials_path: env::var("FIREBASE_CREDENTIALS_PATH")
                .unwrap_or_else(|_| "serviceAccountKey.json".to_string()),
            firebase_database_url: non_empty_var("FIREBASE_DATABASE_URL"),
            firebase_timeout: timeout_var("FIREBASE_TIMEOUT_SECS", 30)?,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn timeout_var(key: &str, default_secs: u64) -> Result<Duration> {
    let secs = match non_empty_var(key) {
        Some(value) => parse_timeout_secs(&value)
            .with_context(|| format!("{key} must be a positive number of seconds"))?,
        None => default_secs,
    };
    Ok(Duration::from_secs(secs))
}

fn parse_timeout_secs(value: &str) -> Result<u64> {
    let secs: u64 = value.trim().parse()?;
    anyhow::ensure!(secs > 0, "timeout must be greater than zero");
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_must_be_positive_seconds() {
        assert_eq!(parse_timeout_secs(" 45 ").unwrap(), 45);
        assert!(parse_timeout_secs("0").is_err());
        assert!(parse_timeout_secs("soon").is_err());
    }
}
