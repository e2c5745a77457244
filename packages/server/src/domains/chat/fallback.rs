//! Canned replies used when the AI is unavailable.

use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::kernel::BaseFallback;

pub const DEFAULT_REPLY: &str = "I'm not sure how to respond to that. Can you try rephrasing?";

const STATIC_REPLIES: &[(&str, &str)] = &[
    ("hello", "Hi there! How can I assist you today?"),
    (
        "how are you",
        "I'm just a bot, but I'm functioning as expected! How about you?",
    ),
    ("bye", "Goodbye! Have a great day!"),
];

/// Exact-match phrase table. Lookup is case-insensitive; "time" and "date"
/// are answered from the clock at call time.
#[derive(Debug, Clone)]
pub struct FallbackTable {
    replies: HashMap<&'static str, &'static str>,
}

impl FallbackTable {
    pub fn new() -> Self {
        Self {
            replies: STATIC_REPLIES.iter().copied().collect(),
        }
    }

    /// Reply as of `now`.
    pub fn reply_at(&self, input: &str, now: DateTime<Local>) -> String {
        let normalized = input.to_lowercase();

        match normalized.as_str() {
            "time" => format!("The current time is {}.", now.format("%H:%M:%S")),
            "date" => format!("Today's date is {}.", now.format("%Y-%m-%d")),
            phrase => self
                .replies
                .get(phrase)
                .copied()
                .unwrap_or(DEFAULT_REPLY)
                .to_string(),
        }
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseFallback for FallbackTable {
    fn reply(&self, input: &str) -> String {
        self.reply_at(input, Local::now())
    }
}
