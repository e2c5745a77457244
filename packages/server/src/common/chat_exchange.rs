use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// One question/answer pair, as written to every chat store.
///
/// The timestamp is taken once from the local clock when the exchange is
/// created, so every store records the same instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatExchange {
    pub user_input: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatExchange {
    pub fn new(user_input: impl Into<String>, bot_response: impl Into<String>) -> Self {
        Self::at(user_input, bot_response, Utc::now())
    }

    pub fn at(
        user_input: impl Into<String>,
        bot_response: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            user_input: user_input.into(),
            bot_response: bot_response.into(),
            timestamp,
        }
    }

    /// ISO-8601 rendering used where a store keeps the timestamp as text.
    pub fn timestamp_iso8601(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}
