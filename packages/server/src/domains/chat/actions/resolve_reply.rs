//! Resolve reply action - AI first, canned reply on failure

use tracing::{info, warn};

use crate::domains::chat::{ReplySource, ResolvedReply};
use crate::kernel::ServerDeps;

/// Produce exactly one reply for `input`.
///
/// The AI's answer is used verbatim when the call succeeds. Any AI error
/// switches to the fallback table; the error itself is only logged.
pub async fn resolve_reply(input: &str, deps: &ServerDeps) -> ResolvedReply {
    match deps.ai.complete(input).await {
        Ok(text) => {
            info!(model = deps.ai.model(), reply_length = text.len(), "AI reply resolved");
            ResolvedReply {
                text,
                source: ReplySource::Primary,
            }
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "AI unavailable, using fallback reply");
            ResolvedReply {
                text: deps.fallback.reply(input),
                source: ReplySource::Fallback,
            }
        }
    }
}
