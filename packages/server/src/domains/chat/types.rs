use serde::Serialize;
use thiserror::Error;

/// Which responder produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReply {
    pub text: String,
    pub source: ReplySource,
}

/// Result of one store write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOutcome {
    pub store: String,
    pub stored: bool,
}

/// A fully handled chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub source: ReplySource,
    pub persisted: Vec<StoreOutcome>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("No message provided")]
    NoMessage,
}
