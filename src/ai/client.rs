use crate::types::{ChatMessage, Role};
use async_trait::async_trait;
use rig::completion::{CompletionError, PromptError};
use thiserror::Error;

// ============================================
// Error Types
// ============================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChatError {
    #[error("OPENAI_API_KEY not found")]
    MissingCredential,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("service rejected the request: {0}")]
    Rejected(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("no user turn to answer")]
    NoPendingTurn,
}

/// Coarse error category, for callers that branch on the failure source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Setup,
    Transport,
    Service,
}

impl ChatError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::MissingCredential | ChatError::NoPendingTurn => ErrorKind::Setup,
            ChatError::Transport(_) => ErrorKind::Transport,
            ChatError::Rejected(_) | ChatError::Malformed(_) => ErrorKind::Service,
        }
    }

    /// Text recorded as the assistant turn when a call fails.
    pub fn to_reply(&self) -> String {
        format!("❌ Error getting response: {self}")
    }
}

impl From<CompletionError> for ChatError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::HttpError(inner) => ChatError::Transport(inner.to_string()),
            CompletionError::ProviderError(message) => ChatError::Rejected(message),
            CompletionError::ResponseError(message) => ChatError::Malformed(message),
            CompletionError::JsonError(inner) => ChatError::Malformed(inner.to_string()),
            other => ChatError::Transport(other.to_string()),
        }
    }
}

impl From<PromptError> for ChatError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::CompletionError(inner) => inner.into(),
            other => ChatError::Rejected(other.to_string()),
        }
    }
}

pub type ChatResult<T> = Result<T, ChatError>;

// ============================================
// Backend seam
// ============================================

/// One outbound completion call.
///
/// `messages` is the whole transcript: system message first, ending with the
/// user turn to answer. Implementations keep no state between calls.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> ChatResult<String>;
}

/// Submit a transcript and return the reply text.
pub async fn chat_reply(
    backend: &dyn CompletionBackend,
    messages: &[ChatMessage],
) -> ChatResult<String> {
    if !matches!(messages.last(), Some(msg) if msg.role == Role::User) {
        return Err(ChatError::NoPendingTurn);
    }

    tracing::debug!(messages = messages.len(), "requesting completion");
    match backend.complete(messages).await {
        Ok(reply) => {
            tracing::debug!(chars = reply.len(), "completion received");
            Ok(reply)
        }
        Err(err) => {
            tracing::warn!(kind = ?err.kind(), "completion failed: {err}");
            Err(err)
        }
    }
}
