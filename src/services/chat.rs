use crate::error::{AppError, AppResult};
use crate::models::chat::{ChatMessage, ChatRole, ChatStatus};
use crate::services::assistant::GatewayError;

/// Exact marker the assistant emits instead of a reply when it detects distress.
pub const CRISIS_MARKER: &str = "[CRISIS_DETECTED]";

pub const GREETING: &str =
    "Hello! I'm Mind Mate, your supportive companion. How are you feeling today?";
pub const CRISIS_REPLY: &str = "It sounds like you're going through a lot right now... For immediate support, please contact a professional. Here are some resources.";
pub const FALLBACK_REPLY: &str =
    "I'm having a little trouble connecting right now. Please try again.";
pub const EMPTY_REPLY: &str = "I'm not sure how to respond to that.";

/// Chat transcript plus the {idle, awaiting} gate around the assistant call.
///
/// A send is split in two so the caller can release its lock while the
/// remote call is in flight: `begin_send` records the user's message and
/// flips to awaiting, `complete` records exactly one assistant message and
/// flips back.
#[derive(Debug)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    status: ChatStatus,
    crisis_open: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING)],
            status: ChatStatus::Idle,
            crisis_open: false,
        }
    }

    pub fn begin_send(&mut self, text: &str) -> AppResult<()> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyMessage);
        }
        if self.status == ChatStatus::Awaiting {
            return Err(AppError::AssistantBusy);
        }

        self.messages.push(ChatMessage::new(ChatRole::User, text));
        self.status = ChatStatus::Awaiting;
        tracing::debug!(chars = text.chars().count(), "Chat awaiting assistant reply");
        Ok(())
    }

    pub fn complete(&mut self, outcome: Result<String, GatewayError>) -> ChatMessage {
        let content = match outcome {
            Ok(reply) if reply.contains(CRISIS_MARKER) => {
                tracing::info!("Assistant flagged a crisis, raising resource panel");
                self.crisis_open = true;
                CRISIS_REPLY.to_string()
            }
            Ok(reply) if reply.is_empty() => EMPTY_REPLY.to_string(),
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "Assistant unavailable, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        let message = ChatMessage::new(ChatRole::Assistant, content);
        self.messages.push(message.clone());
        self.status = ChatStatus::Idle;
        message
    }

    pub fn dismiss_crisis(&mut self) {
        self.crisis_open = false;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn status(&self) -> ChatStatus {
        self.status
    }

    pub fn crisis_open(&self) -> bool {
        self.crisis_open
    }
}
